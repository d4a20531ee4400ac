use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid icon size: {0} (must be > 0)")]
    InvalidSize(u32),

    #[error("Icon target '{0}' has no sizes")]
    EmptySizes(String),

    // ICO directory entries store width/height in a single byte (0 means 256)
    #[error("ICO size {0} exceeds the 256px limit")]
    IcoSizeTooLarge(u32),
}
