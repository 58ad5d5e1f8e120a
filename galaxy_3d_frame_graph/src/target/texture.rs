/// Texture descriptions referenced by render targets.
///
/// Only the properties the frame graph reasons about are kept here:
/// dimensions, mip count and whether the texture is a cubemap.

use slotmap::new_key_type;

new_key_type! {
    /// Stable key for a Texture within a TargetManager.
    ///
    /// Keys remain valid even after other textures are removed.
    pub struct TextureKey;
}

/// Number of faces (array layers) of a cubemap texture
pub const CUBEMAP_FACE_COUNT: u32 = 6;

/// Texture shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    /// Regular 2D texture (one layer)
    Texture2D,
    /// Cubemap (six square faces sharing one mip chain)
    Cubemap,
}

/// Descriptor for creating a texture
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Debug name
    pub name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Texture shape
    pub kind: TextureKind,
    /// Number of mip levels (1 = no mip chain)
    pub mip_levels: u32,
}

impl TextureDesc {
    /// Descriptor with a single mip level
    pub fn new(name: &str, width: u32, height: u32, kind: TextureKind) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            kind,
            mip_levels: 1,
        }
    }

    /// Set the number of mip levels
    pub fn with_mip_levels(mut self, mip_levels: u32) -> Self {
        self.mip_levels = mip_levels;
        self
    }
}

/// A registered texture
#[derive(Debug, Clone)]
pub struct Texture {
    name: String,
    width: u32,
    height: u32,
    kind: TextureKind,
    mip_levels: u32,
}

impl Texture {
    pub(crate) fn from_desc(desc: TextureDesc) -> Self {
        Self {
            name: desc.name,
            width: desc.width,
            height: desc.height,
            kind: desc.kind,
            mip_levels: desc.mip_levels,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn kind(&self) -> TextureKind {
        self.kind
    }

    pub fn mip_levels(&self) -> u32 {
        self.mip_levels
    }

    pub fn is_cubemap(&self) -> bool {
        self.kind == TextureKind::Cubemap
    }

    /// Number of array layers a render target may select
    pub fn layer_count(&self) -> u32 {
        match self.kind {
            TextureKind::Texture2D => 1,
            TextureKind::Cubemap => CUBEMAP_FACE_COUNT,
        }
    }
}
