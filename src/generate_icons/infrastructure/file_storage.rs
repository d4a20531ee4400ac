use super::error::InfrastructureError;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    pub fn read_image(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError> {
        let data = fs::read(path).map_err(InfrastructureError::IoError)?;
        debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }

    /// Overwrites `path` with `data`. A failed write may leave a truncated file behind.
    pub fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        let mut file = File::create(path).map_err(|e| {
            InfrastructureError::FileStorageError(format!("cannot create {}: {}", path.display(), e))
        })?;
        file.write_all(data).map_err(InfrastructureError::IoError)?;
        debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}

impl Default for LocalFileStorage {
    fn default() -> Self {
        Self::new()
    }
}
