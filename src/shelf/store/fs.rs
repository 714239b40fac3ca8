use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: the whole collection is one JSON array on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }

    fn scratch_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "inventory.json".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, std::process::id()))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(ShelfError::CorruptData)?;
        Ok(products)
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.ensure_parent_dir()?;

        let content =
            serde_json::to_string_pretty(products).map_err(ShelfError::CorruptData)?;

        // Write to a scratch file and rename over the data file so an
        // interrupted save never leaves the collection half-truncated.
        let scratch = self.scratch_path();
        fs::write(&scratch, content).map_err(ShelfError::Io)?;
        fs::rename(&scratch, &self.path).map_err(ShelfError::Io)?;

        Ok(())
    }
}
