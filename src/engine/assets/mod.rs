// Asset management system
//
// Resolves texture files on disk and records their pixel dimensions. Loading is tolerant:
// a missing or unreadable file is logged and skipped so the game keeps running without it.

mod loader;
mod manager;

pub use loader::AssetLoader;
pub use manager::{AssetManager, AssetStats, TextureInfo};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("idle.png".to_string());
        assert_eq!(err.to_string(), "Asset not found: idle.png");
    }
}
