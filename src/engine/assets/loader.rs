// Asset loading functionality

use super::AssetError;
use std::path::{Path, PathBuf};

/// Supported texture file extensions
const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Asset loader responsible for finding asset files and reading their headers
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, relative: &str) -> PathBuf {
        self.base_path.join(relative)
    }

    /// Check if an asset exists
    pub fn exists(&self, relative: &str) -> bool {
        self.resolve_path(relative).is_file()
    }

    /// Read a texture's pixel dimensions without decoding the whole image
    pub fn texture_dimensions(&self, relative: &str) -> Result<(u32, u32), AssetError> {
        let path = self.resolve_path(relative);

        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        let supported = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| TEXTURE_EXTENSIONS.contains(&ext.as_str()));
        if !supported {
            return Err(AssetError::LoadError(format!(
                "Unsupported texture format: {}",
                relative
            )));
        }

        Ok(image::image_dimensions(&path)?)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
