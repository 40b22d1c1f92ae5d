// Central texture registry

use super::{AssetError, AssetLoader};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Pixel size of a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Central asset manager for the game
///
/// Textures are addressed by key (e.g. `player_walk`, `dust1`), independent of their file path.
pub struct AssetManager {
    /// Asset loader
    loader: AssetLoader,

    /// Loaded textures by key
    textures: HashMap<String, TextureInfo>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            textures: HashMap::new(),
        }
    }

    /// Load a texture from disk under `key`
    ///
    /// Loading a key twice returns the already-registered texture.
    pub fn load_texture(&mut self, key: &str, relative: &str) -> Result<TextureInfo, AssetError> {
        if let Some(info) = self.textures.get(key) {
            return Ok(*info);
        }

        let (width, height) = self.loader.texture_dimensions(relative)?;
        let info = TextureInfo::new(width, height);
        self.textures.insert(key.to_string(), info);
        info!("Loaded texture \"{}\" ({}x{}) from {}", key, width, height, relative);

        Ok(info)
    }

    /// Load a texture, logging and skipping it on failure
    pub fn try_load_texture(&mut self, key: &str, relative: &str) -> Option<TextureInfo> {
        match self.load_texture(key, relative) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Failed to load asset \"{}\" ({}): {}", key, relative, e);
                None
            }
        }
    }

    /// Register a texture that did not come from disk
    pub fn insert_texture(&mut self, key: &str, info: TextureInfo) {
        self.textures.insert(key.to_string(), info);
    }

    /// Get a texture by key
    pub fn texture(&self, key: &str) -> Option<TextureInfo> {
        self.textures.get(key).copied()
    }

    /// Check if a texture is registered
    pub fn exists(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            texture_count: self.textures.len(),
        }
    }

    /// Get the asset loader
    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }
}

/// Statistics about loaded assets
#[derive(Debug, Clone, Copy)]
pub struct AssetStats {
    pub texture_count: usize,
}
