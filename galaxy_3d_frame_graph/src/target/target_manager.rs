/// Central render target registry.
///
/// Owns textures and the render targets viewing them. Both are stored in
/// slot maps so keys stay stable while other entries come and go.

use slotmap::SlotMap;
use crate::error::Result;
use crate::engine_bail;
use super::texture::{Texture, TextureDesc, TextureKey, TextureKind, CUBEMAP_FACE_COUNT};
use super::render_target::{
    RenderTarget, RenderTargetDesc, RenderTargetHandle, RenderTargetKey, TargetTexture,
};

/// Target manager singleton (managed by Engine)
pub struct TargetManager {
    textures: SlotMap<TextureKey, Texture>,
    render_targets: SlotMap<RenderTargetKey, RenderTarget>,
}

impl TargetManager {
    /// Create a new empty target manager
    pub fn new() -> Self {
        Self {
            textures: SlotMap::with_key(),
            render_targets: SlotMap::with_key(),
        }
    }

    // ===== TEXTURES =====

    /// Register a texture
    ///
    /// # Errors
    ///
    /// Returns an error if the texture has a zero dimension, zero mip
    /// levels, or is a non-square cubemap.
    pub fn create_texture(&mut self, desc: TextureDesc) -> Result<TextureKey> {
        if desc.width == 0 || desc.height == 0 {
            engine_bail!(InvalidResource, "galaxy3d::TargetManager",
                "Texture '{}' has zero size ({}x{})", desc.name, desc.width, desc.height);
        }
        if desc.mip_levels == 0 {
            engine_bail!(InvalidResource, "galaxy3d::TargetManager",
                "Texture '{}' needs at least one mip level", desc.name);
        }
        if desc.kind == TextureKind::Cubemap && desc.width != desc.height {
            engine_bail!(InvalidResource, "galaxy3d::TargetManager",
                "Cubemap '{}' faces must be square ({}x{})", desc.name, desc.width, desc.height);
        }

        Ok(self.textures.insert(Texture::from_desc(desc)))
    }

    /// Get a texture by key
    pub fn texture(&self, key: TextureKey) -> Option<&Texture> {
        self.textures.get(key)
    }

    /// Remove a texture
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or a render target still
    /// views the texture.
    pub fn remove_texture(&mut self, key: TextureKey) -> Result<Texture> {
        let users = self.render_targets.values()
            .filter(|rt| rt.color_texture() == Some(key))
            .count();
        if users > 0 {
            engine_bail!(InvalidResource, "galaxy3d::TargetManager",
                "Texture {:?} is still used by {} render target(s)", key, users);
        }

        match self.textures.remove(key) {
            Some(texture) => Ok(texture),
            None => engine_bail!(InvalidResource, "galaxy3d::TargetManager",
                "Unknown texture {:?}", key),
        }
    }

    /// Number of registered textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    // ===== RENDER TARGETS =====

    /// Register a render target
    ///
    /// # Errors
    ///
    /// Returns an error if the color texture is unknown, or the layer / mip
    /// level is out of range for it.
    pub fn create_render_target(&mut self, desc: RenderTargetDesc) -> Result<RenderTargetHandle> {
        let target_texture = match desc.color_texture {
            Some(key) => {
                let Some(texture) = self.textures.get(key) else {
                    engine_bail!(InvalidResource, "galaxy3d::TargetManager",
                        "RenderTarget '{}' references unknown texture {:?}", desc.name, key);
                };
                if desc.layer >= texture.layer_count() {
                    engine_bail!(InvalidResource, "galaxy3d::TargetManager",
                        "RenderTarget '{}' layer {} out of range for '{}' ({} layers)",
                        desc.name, desc.layer, texture.name(), texture.layer_count());
                }
                if desc.mip_level >= texture.mip_levels() {
                    engine_bail!(InvalidResource, "galaxy3d::TargetManager",
                        "RenderTarget '{}' mip {} out of range for '{}' ({} mips)",
                        desc.name, desc.mip_level, texture.name(), texture.mip_levels());
                }
                Some(TargetTexture { key, is_cubemap: texture.is_cubemap() })
            }
            None => None,
        };

        Ok(self.insert_render_target(desc, target_texture))
    }

    /// Create one render target per face of a cubemap
    ///
    /// Targets are named `<texture>_face<N>` and returned in face order.
    ///
    /// # Errors
    ///
    /// Returns an error if the texture is unknown, not a cubemap, or the mip
    /// level is out of range.
    pub fn create_cubemap_face_targets(
        &mut self,
        texture: TextureKey,
        mip_level: u32,
    ) -> Result<[RenderTargetHandle; CUBEMAP_FACE_COUNT as usize]> {
        let Some(tex) = self.textures.get(texture) else {
            engine_bail!(InvalidResource, "galaxy3d::TargetManager",
                "Unknown texture {:?}", texture);
        };
        if !tex.is_cubemap() {
            engine_bail!(InvalidResource, "galaxy3d::TargetManager",
                "Texture '{}' is not a cubemap", tex.name());
        }
        if mip_level >= tex.mip_levels() {
            engine_bail!(InvalidResource, "galaxy3d::TargetManager",
                "Mip {} out of range for '{}' ({} mips)", mip_level, tex.name(), tex.mip_levels());
        }

        let name = tex.name().to_string();
        let target_texture = TargetTexture { key: texture, is_cubemap: true };

        Ok(std::array::from_fn(|face| {
            let desc = RenderTargetDesc::new(&format!("{}_face{}", name, face))
                .with_color_texture(texture)
                .with_layer(face as u32)
                .with_mip_level(mip_level);
            self.insert_render_target(desc, Some(target_texture))
        }))
    }

    fn insert_render_target(
        &mut self,
        desc: RenderTargetDesc,
        target_texture: Option<TargetTexture>,
    ) -> RenderTargetHandle {
        let key = self.render_targets.insert(RenderTarget::from_desc(desc));
        RenderTargetHandle::new(key, target_texture)
    }

    /// Get a render target by key
    pub fn render_target(&self, key: RenderTargetKey) -> Option<&RenderTarget> {
        self.render_targets.get(key)
    }

    /// Rebuild the handle of a registered render target
    pub fn handle(&self, key: RenderTargetKey) -> Option<RenderTargetHandle> {
        let rt = self.render_targets.get(key)?;
        let target_texture = match rt.color_texture() {
            Some(tex_key) => {
                let texture = self.textures.get(tex_key)?;
                Some(TargetTexture { key: tex_key, is_cubemap: texture.is_cubemap() })
            }
            None => None,
        };
        Some(RenderTargetHandle::new(key, target_texture))
    }

    /// Remove a render target
    ///
    /// Returns the removed render target, or None if not found.
    pub fn remove_render_target(&mut self, key: RenderTargetKey) -> Option<RenderTarget> {
        self.render_targets.remove(key)
    }

    /// Number of registered render targets
    pub fn render_target_count(&self) -> usize {
        self.render_targets.len()
    }

    /// Remove all render targets and textures
    pub fn clear(&mut self) {
        self.render_targets.clear();
        self.textures.clear();
    }
}

impl Default for TargetManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "target_manager_tests.rs"]
mod tests;
