use std::path::PathBuf;

use data_error::ReadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size '{0}': expected bytes with an optional K, M or G suffix")]
    InvalidSize(String),

    #[error("Size '{0}' does not fit in memory addresses")]
    SizeOverflow(String),

    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
}
