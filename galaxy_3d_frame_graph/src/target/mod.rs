//! Render target registry
//!
//! Textures and render targets live here and are identified by stable
//! slotmap keys. The frame graph only ever compares keys, so two targets
//! with identical descriptions are still distinct targets.

mod texture;
mod render_target;
mod target_manager;

pub use texture::{Texture, TextureDesc, TextureKey, TextureKind, CUBEMAP_FACE_COUNT};
pub use render_target::{
    RenderTarget, RenderTargetDesc, RenderTargetHandle, RenderTargetKey, TargetTexture,
};
pub use target_manager::TargetManager;
