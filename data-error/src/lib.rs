use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReadError>;

/// Reasons a bounded read did not complete successfully.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Path references a parent directory: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("Could not open file: {0}")]
    Open(#[source] io::Error),
    #[error("File content exceeds the limit of {max_size} bytes")]
    SizeExceeded { max_size: usize },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("File content is not valid UTF-8")]
    Utf8,
}

impl ReadError {
    /// `true` when the read stopped because of the size limit rather than
    /// a failure of the path, the open or the stream.
    pub fn is_size_exceeded(&self) -> bool {
        matches!(self, Self::SizeExceeded { .. })
    }
}

impl From<FromUtf8Error> for ReadError {
    fn from(_: FromUtf8Error) -> Self {
        Self::Utf8
    }
}
