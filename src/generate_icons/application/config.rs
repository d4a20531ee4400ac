use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::error::ApplicationError;
use crate::domain::icon_target::{default_targets, IconTarget};

pub const SOURCE_LOGO_FILE_NAME: &str = "wds-logo.png";
pub const PUBLIC_DIR_NAME: &str = "public";

/// Where the logo is read from, where icons are written, and which icons to write.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub public_dir: PathBuf,
    pub source_file_name: String,
    pub targets: Vec<IconTarget>,
}

impl GeneratorConfig {
    /// Resolves `public/` next to this generator's crate directory.
    ///
    /// The crate directory plays the role of the scripts folder, so the logo is
    /// expected at `<crate>/../public/wds-logo.png`. The path is fixed when the
    /// binary is built: it is relative to the crate that compiled it, not to
    /// wherever the running executable lives.
    pub fn locate() -> Result<Self, ApplicationError> {
        Self::from_script_dir(Path::new(env!("CARGO_MANIFEST_DIR")))
    }

    pub fn from_script_dir(script_dir: &Path) -> Result<Self, ApplicationError> {
        let web_dir = script_dir.parent().ok_or_else(|| {
            ApplicationError::ConfigurationError(format!(
                "{} has no parent directory",
                script_dir.display()
            ))
        })?;
        Ok(Self::for_public_dir(web_dir.join(PUBLIC_DIR_NAME)))
    }

    pub fn for_public_dir(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
            source_file_name: SOURCE_LOGO_FILE_NAME.to_string(),
            targets: default_targets(),
        }
    }

    pub fn source_path(&self) -> PathBuf {
        self.public_dir.join(&self.source_file_name)
    }

    pub fn output_path(&self, target: &IconTarget) -> PathBuf {
        self.public_dir.join(&target.file_name)
    }

    pub fn validate(&self) -> Result<(), ApplicationError> {
        let mut seen = HashSet::new();
        for target in &self.targets {
            target.validate()?;
            if !seen.insert(target.file_name.as_str()) {
                return Err(ApplicationError::ConfigurationError(format!(
                    "duplicate output file name: {}",
                    target.file_name
                )));
            }
            if target.file_name == self.source_file_name {
                return Err(ApplicationError::ConfigurationError(format!(
                    "output {} would overwrite the source logo",
                    target.file_name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;

    #[test]
    fn test_from_script_dir_points_at_sibling_public() {
        let config = GeneratorConfig::from_script_dir(Path::new("/srv/web/scripts")).unwrap();
        assert_eq!(config.public_dir, PathBuf::from("/srv/web/public"));
        assert_eq!(config.source_path(), PathBuf::from("/srv/web/public/wds-logo.png"));
        assert_eq!(config.targets.len(), 6);
        assert_eq!(
            config.output_path(&config.targets[0]),
            PathBuf::from("/srv/web/public/favicon.ico")
        );
    }

    #[test]
    fn test_from_script_dir_without_parent() {
        let result = GeneratorConfig::from_script_dir(Path::new("/"));
        assert!(matches!(result, Err(ApplicationError::ConfigurationError(_))));
    }

    #[test]
    fn test_locate_uses_crate_parent() {
        let config = GeneratorConfig::locate().unwrap();
        let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert_eq!(config.public_dir, crate_dir.parent().unwrap().join("public"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::for_public_dir("public").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicates_and_bad_targets() {
        let mut config = GeneratorConfig::for_public_dir("public");
        config.targets.push(IconTarget::png("favicon-16x16.png", 16));
        assert!(matches!(
            config.validate(),
            Err(ApplicationError::ConfigurationError(_))
        ));

        let mut config = GeneratorConfig::for_public_dir("public");
        config.targets.push(IconTarget::png(SOURCE_LOGO_FILE_NAME, 64));
        assert!(matches!(
            config.validate(),
            Err(ApplicationError::ConfigurationError(_))
        ));

        let mut config = GeneratorConfig::for_public_dir("public");
        config.targets.push(IconTarget::png("broken.png", 0));
        assert!(matches!(
            config.validate(),
            Err(ApplicationError::DomainError(DomainError::InvalidSize(0)))
        ));
    }
}
