use crate::pool::PoolError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Age of '{name}' (born {born}) does not fit relative to year {reference_year}")]
    AgeOutOfRange {
        name: String,
        reference_year: i32,
        born: i32,
    },

    #[error("Worker pool failed: {0}")]
    Pool(#[from] PoolError),

    #[error("Failed to build rayon pool: {0}")]
    Rayon(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to render results: {0}")]
    Render(#[from] serde_json::Error),
}
