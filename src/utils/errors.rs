use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerfError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid runway identifier: {0}")]
    InvalidRunwayFormat(String),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),
}
