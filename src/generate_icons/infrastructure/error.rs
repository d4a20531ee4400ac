use thiserror::Error;
use crate::domain::error::DomainError;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Image processing failed: {0}")]
    ImageProcessingError(String),

    #[error("File storage error: {0}")]
    FileStorageError(String),

    #[error("{0}")]
    ImageLibError(#[from] image::ImageError),

    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // 不正なサイズ指定など、ターゲット定義の検証エラー
    #[error("{0}")]
    DomainErrorWrapper(#[from] DomainError),
}
