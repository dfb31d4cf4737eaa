use thiserror::Error;

use crate::catalog::errors::{LoadError, LookupError};

/// Everything the command line can fail with.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Server error: {0}")]
    ServerError(#[from] std::io::Error),

    #[error("Music data error: {0}")]
    LoadError(#[from] LoadError),

    #[error("Lookup error: {0}")]
    LookupError(#[from] LookupError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
