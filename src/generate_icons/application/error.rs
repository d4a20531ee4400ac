use std::path::PathBuf;
use thiserror::Error;
use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Logo not found at {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("{0}")]
    DomainError(#[from] DomainError),

    #[error("{0}")]
    InfrastructureError(#[from] InfrastructureError),
}
