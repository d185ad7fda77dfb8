use {base::TensorError, std::fmt};

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Empty(String),
    Size(String),
    Tensor(TensorError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Empty(msg) => write!(f, "empty image: {msg}"),
            ImageError::Size(msg) => write!(f, "size error: {msg}"),
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<TensorError> for ImageError {
    fn from(err: TensorError) -> Self {
        ImageError::Tensor(err)
    }
}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}
