use {image::ImageError, inference::InferError, std::fmt};

/// Failure inside one classification pass. Never leaves `Classifier::classify`.
#[derive(Debug)]
pub enum PostureError {
    Image(ImageError),
    Infer(InferError),
    Output(String),
}

impl fmt::Display for PostureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostureError::Image(e) => write!(f, "preprocessing error: {e}"),
            PostureError::Infer(e) => write!(f, "inference error: {e}"),
            PostureError::Output(msg) => write!(f, "model output error: {msg}"),
        }
    }
}

impl std::error::Error for PostureError {}

impl From<ImageError> for PostureError {
    fn from(err: ImageError) -> Self {
        PostureError::Image(err)
    }
}

impl From<InferError> for PostureError {
    fn from(err: InferError) -> Self {
        PostureError::Infer(err)
    }
}

impl From<base::TensorError> for PostureError {
    fn from(err: base::TensorError) -> Self {
        PostureError::Infer(InferError::from(err))
    }
}

/// Startup configuration failure.
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "config io error: {msg}"),
            ConfigError::Parse(msg) => write!(f, "config parse error: {msg}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
