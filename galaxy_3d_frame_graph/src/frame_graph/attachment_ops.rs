/// Attachment load/store configuration carried by render passes.
///
/// Passes request their ops with these structs; `FrameGraph::compile()`
/// resolves them into the ops actually handed to each pass action.
/// Clear values ride along untouched.

/// Load operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOp {
    /// Load existing content
    Load,
    /// Clear the content
    Clear,
}

/// Store operation for an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    /// Store the rendered content
    Store,
    /// Don't care about storing the content
    DontCare,
}

impl LoadOp {
    fn from_clear(clear: bool) -> Self {
        if clear { LoadOp::Clear } else { LoadOp::Load }
    }
}

impl StoreOp {
    fn from_store(store: bool) -> Self {
        if store { StoreOp::Store } else { StoreOp::DontCare }
    }
}

/// Ops of one color attachment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAttachmentOps {
    /// Clear color (RGBA), default: opaque black
    pub clear_value: [f32; 4],
    /// Clear before rendering
    pub clear: bool,
    /// Keep the content after the pass
    pub store: bool,
    /// Resolve the multisampled content after the pass
    pub resolve: bool,
    /// Regenerate the mip chain after the pass
    pub mipmaps: bool,
}

impl ColorAttachmentOps {
    /// Load, don't store, no resolve, no mipmaps
    pub fn new() -> Self {
        Self {
            clear_value: [0.0, 0.0, 0.0, 1.0],
            clear: false,
            store: false,
            resolve: false,
            mipmaps: false,
        }
    }

    /// Clear to the given color before rendering
    pub fn with_clear(mut self, color: [f32; 4]) -> Self {
        self.clear = true;
        self.clear_value = color;
        self
    }

    pub fn with_store(mut self, store: bool) -> Self {
        self.store = store;
        self
    }

    pub fn with_resolve(mut self, resolve: bool) -> Self {
        self.resolve = resolve;
        self
    }

    pub fn with_mipmaps(mut self, mipmaps: bool) -> Self {
        self.mipmaps = mipmaps;
        self
    }

    pub fn load_op(&self) -> LoadOp {
        LoadOp::from_clear(self.clear)
    }

    pub fn store_op(&self) -> StoreOp {
        StoreOp::from_store(self.store)
    }
}

impl Default for ColorAttachmentOps {
    fn default() -> Self {
        Self::new()
    }
}

/// Ops of the depth/stencil attachment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStencilOps {
    /// Depth clear value, default: 1.0
    pub clear_depth_value: f32,
    /// Stencil clear value, default: 0
    pub clear_stencil_value: u32,
    pub clear_depth: bool,
    pub store_depth: bool,
    pub clear_stencil: bool,
    pub store_stencil: bool,
}

impl DepthStencilOps {
    /// Load both aspects, store neither
    pub fn new() -> Self {
        Self {
            clear_depth_value: 1.0,
            clear_stencil_value: 0,
            clear_depth: false,
            store_depth: false,
            clear_stencil: false,
            store_stencil: false,
        }
    }

    pub fn with_clear_depth(mut self, value: f32) -> Self {
        self.clear_depth = true;
        self.clear_depth_value = value;
        self
    }

    pub fn with_clear_stencil(mut self, value: u32) -> Self {
        self.clear_stencil = true;
        self.clear_stencil_value = value;
        self
    }

    pub fn with_store_depth(mut self, store: bool) -> Self {
        self.store_depth = store;
        self
    }

    pub fn with_store_stencil(mut self, store: bool) -> Self {
        self.store_stencil = store;
        self
    }

    pub fn depth_load_op(&self) -> LoadOp {
        LoadOp::from_clear(self.clear_depth)
    }

    pub fn depth_store_op(&self) -> StoreOp {
        StoreOp::from_store(self.store_depth)
    }

    pub fn stencil_load_op(&self) -> LoadOp {
        LoadOp::from_clear(self.clear_stencil)
    }

    pub fn stencil_store_op(&self) -> StoreOp {
        StoreOp::from_store(self.store_stencil)
    }
}

impl Default for DepthStencilOps {
    fn default() -> Self {
        Self::new()
    }
}

/// Full attachment configuration of one pass
///
/// `color` holds one entry per color output (several for MRT) and is
/// never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PassOps {
    pub color: Vec<ColorAttachmentOps>,
    pub depth_stencil: DepthStencilOps,
}

impl PassOps {
    /// Single color output
    pub fn new(color: ColorAttachmentOps) -> Self {
        Self {
            color: vec![color],
            depth_stencil: DepthStencilOps::new(),
        }
    }

    /// Several color outputs (MRT)
    pub fn with_color_outputs(color: Vec<ColorAttachmentOps>) -> Self {
        debug_assert!(!color.is_empty(), "PassOps needs at least one color output");
        Self {
            color,
            depth_stencil: DepthStencilOps::new(),
        }
    }

    pub fn with_depth_stencil(mut self, depth_stencil: DepthStencilOps) -> Self {
        self.depth_stencil = depth_stencil;
        self
    }
}

impl Default for PassOps {
    fn default() -> Self {
        Self::new(ColorAttachmentOps::new())
    }
}

#[cfg(test)]
#[path = "attachment_ops_tests.rs"]
mod tests;
