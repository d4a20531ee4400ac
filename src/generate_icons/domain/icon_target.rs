use crate::domain::error::DomainError;

/// Largest edge an ICO directory entry can describe.
pub const MAX_ICO_SIZE: u32 = 256;

pub const DEFAULT_ICO_SIZES: [u32; 3] = [16, 32, 48];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    Ico,
    Png,
}

/// One output file: its name, the square sizes it holds, and how it is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub file_name: String,
    pub sizes: Vec<u32>,
    pub format: IconFormat,
}

impl IconTarget {
    pub fn ico(file_name: impl Into<String>, sizes: &[u32]) -> Self {
        Self {
            file_name: file_name.into(),
            sizes: sizes.to_vec(),
            format: IconFormat::Ico,
        }
    }

    pub fn png(file_name: impl Into<String>, size: u32) -> Self {
        Self {
            file_name: file_name.into(),
            sizes: vec![size],
            format: IconFormat::Png,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.sizes.is_empty() {
            return Err(DomainError::EmptySizes(self.file_name.clone()));
        }
        validate_sizes(self.format, &self.sizes)
    }

    /// Summary label, e.g. `favicon.ico (16x16, 32x32, 48x48)`.
    pub fn describe(&self) -> String {
        let sizes = self
            .sizes
            .iter()
            .map(|s| format!("{s}x{s}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} ({})", self.file_name, sizes)
    }
}

/// Size rules shared by target definitions and the encoder: every size is
/// non-zero, and ICO entries stay within [`MAX_ICO_SIZE`].
pub fn validate_sizes(format: IconFormat, sizes: &[u32]) -> Result<(), DomainError> {
    for &size in sizes {
        if size == 0 {
            return Err(DomainError::InvalidSize(size));
        }
        if format == IconFormat::Ico && size > MAX_ICO_SIZE {
            return Err(DomainError::IcoSizeTooLarge(size));
        }
    }
    Ok(())
}

/// The favicon set a web app ships: one multi-size ICO then the touch icons.
pub fn default_targets() -> Vec<IconTarget> {
    vec![
        IconTarget::ico("favicon.ico", &DEFAULT_ICO_SIZES),
        IconTarget::png("apple-touch-icon.png", 180), // Apple devices
        IconTarget::png("icon-192x192.png", 192),     // Android Chrome
        IconTarget::png("icon-512x512.png", 512),     // Android Chrome (large)
        IconTarget::png("favicon-32x32.png", 32),
        IconTarget::png("favicon-16x16.png", 16),
    ]
}
