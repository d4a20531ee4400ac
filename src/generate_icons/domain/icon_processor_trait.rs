use crate::infrastructure::error::InfrastructureError;

/// Turns the raw bytes of a source logo into encoded icon files.
///
/// Implementations decode `source_bytes` on every call, so a corrupt source
/// fails each target independently.
#[cfg_attr(test, mockall::automock)]
pub trait IconProcessor {
    /// Encodes a multi-resolution ICO with one opaque RGB frame per entry in `sizes`.
    fn create_ico(&self, source_bytes: &[u8], sizes: &[u32]) -> Result<Vec<u8>, InfrastructureError>;

    /// Encodes a `size`x`size` PNG with the logo centered on a transparent canvas.
    fn create_png_icon(&self, source_bytes: &[u8], size: u32) -> Result<Vec<u8>, InfrastructureError>;
}
