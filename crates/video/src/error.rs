use std::{fmt, path::PathBuf};

#[derive(Debug)]
pub enum VideoError {
    /// Reading the frame directory or a frame file failed.
    Io(String),
    /// The replay directory holds no playable frames.
    NoFrames(PathBuf),
    /// A raw sensor dump was found but no frame size was configured.
    RawSize(PathBuf),
    Decode(image::ImageError),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Io(msg) => write!(f, "io error: {msg}"),
            VideoError::NoFrames(dir) => write!(f, "no frames found in {}", dir.display()),
            VideoError::RawSize(path) => {
                write!(f, "raw frame {} needs a configured size", path.display())
            }
            VideoError::Decode(err) => write!(f, "decode error: {err}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<std::io::Error> for VideoError {
    fn from(err: std::io::Error) -> Self {
        VideoError::Io(err.to_string())
    }
}

impl From<image::ImageError> for VideoError {
    fn from(err: image::ImageError) -> Self {
        VideoError::Decode(err)
    }
}
