//! Scaled sprite sizes looked up by asset name

use std::collections::HashMap;

use glam::Vec2;

use super::{AssetError, AssetManifest};

/// Scaled on-screen sprite sizes, built from an [`AssetManifest`]
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    sizes: HashMap<String, Vec2>,
}

impl AssetRegistry {
    /// Build a registry, scaling every image by `scaling`. Zero-sized
    /// images are rejected
    pub fn from_manifest(manifest: &AssetManifest, scaling: f32) -> Result<Self, AssetError> {
        let mut sizes = HashMap::with_capacity(manifest.sprites.len());
        for (name, image) in &manifest.sprites {
            if image.width == 0 || image.height == 0 {
                return Err(AssetError::InvalidSize {
                    name: name.clone(),
                    width: image.width,
                    height: image.height,
                });
            }
            let size = Vec2::new(image.width as f32, image.height as f32) * scaling;
            sizes.insert(name.clone(), size);
        }
        Ok(Self { sizes })
    }

    /// Registry over the stock sprite set
    pub fn builtin(scaling: f32) -> Self {
        let sizes = AssetManifest::builtin()
            .sprites
            .into_iter()
            .map(|(name, image)| {
                (name, Vec2::new(image.width as f32, image.height as f32) * scaling)
            })
            .collect();
        Self { sizes }
    }

    /// On-screen size of a sprite
    pub fn size(&self, name: &str) -> Result<Vec2, AssetError> {
        self.sizes
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::Missing(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
