/// Render target: a (texture, layer, mip) view that passes render into.
///
/// Render targets can only be created via `TargetManager`, which hands out
/// a `RenderTargetHandle`. The handle is what render passes carry.

use slotmap::new_key_type;
use super::texture::TextureKey;

new_key_type! {
    /// Stable key for a RenderTarget within a TargetManager.
    pub struct RenderTargetKey;
}

/// Descriptor for creating a render target
#[derive(Debug, Clone)]
pub struct RenderTargetDesc {
    /// Debug name
    pub name: String,
    /// Color texture written by passes using this target (None = depth-only target)
    pub color_texture: Option<TextureKey>,
    /// Array layer (cubemap face index for cubemaps)
    pub layer: u32,
    /// Mip level rendered into
    pub mip_level: u32,
}

impl RenderTargetDesc {
    /// Target without a color texture, layer 0, mip 0
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            color_texture: None,
            layer: 0,
            mip_level: 0,
        }
    }

    pub fn with_color_texture(mut self, texture: TextureKey) -> Self {
        self.color_texture = Some(texture);
        self
    }

    pub fn with_layer(mut self, layer: u32) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_mip_level(mut self, mip_level: u32) -> Self {
        self.mip_level = mip_level;
        self
    }
}

/// A registered render target
#[derive(Debug, Clone)]
pub struct RenderTarget {
    name: String,
    color_texture: Option<TextureKey>,
    layer: u32,
    mip_level: u32,
}

impl RenderTarget {
    pub(crate) fn from_desc(desc: RenderTargetDesc) -> Self {
        Self {
            name: desc.name,
            color_texture: desc.color_texture,
            layer: desc.layer,
            mip_level: desc.mip_level,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color_texture(&self) -> Option<TextureKey> {
        self.color_texture
    }

    pub fn layer(&self) -> u32 {
        self.layer
    }

    pub fn mip_level(&self) -> u32 {
        self.mip_level
    }
}

/// Color texture of a render target, as seen by the frame graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetTexture {
    /// Texture identity
    pub key: TextureKey,
    /// Whether the texture is a cubemap
    pub is_cubemap: bool,
}

/// Handle to a render target, carried by render passes.
///
/// `RenderTargetHandle` is `Copy`. Identity is the `RenderTargetKey`; the
/// color texture is cached so the frame graph can compile without access
/// to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTargetHandle {
    key: RenderTargetKey,
    color_texture: Option<TargetTexture>,
}

impl RenderTargetHandle {
    pub(crate) fn new(key: RenderTargetKey, color_texture: Option<TargetTexture>) -> Self {
        Self { key, color_texture }
    }

    pub fn key(&self) -> RenderTargetKey {
        self.key
    }

    pub fn color_texture(&self) -> Option<TargetTexture> {
        self.color_texture
    }
}
