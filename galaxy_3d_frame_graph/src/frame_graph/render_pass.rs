/// Render pass submitted to a frame graph.
///
/// A pass pairs a target with the attachment ops it requests and the
/// action that records it. The frame graph may rewrite the ops it hands to
/// the action but never the requested ones stored here.

use std::fmt;
use crate::target::{RenderTargetHandle, RenderTargetKey, TargetTexture};
use super::attachment_ops::PassOps;
use super::pass_action::{AttachmentOnlyAction, PassAction};

/// What a pass renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassTarget {
    /// Target not tracked by the frame graph (e.g. transient or external)
    Untracked,
    /// Default presentation surface
    Screen,
    /// Registered render target
    Target(RenderTargetHandle),
}

impl PassTarget {
    /// Color texture written through this target, if any
    pub fn color_texture(&self) -> Option<TargetTexture> {
        match self {
            PassTarget::Target(handle) => handle.color_texture(),
            _ => None,
        }
    }

    pub fn is_screen(&self) -> bool {
        matches!(self, PassTarget::Screen)
    }

    pub(crate) fn id(&self) -> Option<TargetId> {
        match self {
            PassTarget::Untracked => None,
            PassTarget::Screen => Some(TargetId::Screen),
            PassTarget::Target(handle) => Some(TargetId::Target(handle.key())),
        }
    }
}

impl From<RenderTargetHandle> for PassTarget {
    fn from(handle: RenderTargetHandle) -> Self {
        PassTarget::Target(handle)
    }
}

/// Identity of a tracked target during compilation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TargetId {
    Screen,
    Target(RenderTargetKey),
}

/// Position of a pass within its frame graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PassHandle(pub(crate) usize);

impl PassHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

pub struct RenderPass<Ctx> {
    name: String,
    target: PassTarget,
    ops: PassOps,
    requires_cubemaps: bool,
    action: Box<dyn PassAction<Ctx>>,
}

impl<Ctx> RenderPass<Ctx> {
    /// Pass with default ops (load, don't store) and no action
    pub fn new(name: &str, target: impl Into<PassTarget>) -> Self {
        Self {
            name: name.to_string(),
            target: target.into(),
            ops: PassOps::default(),
            requires_cubemaps: false,
            action: Box::new(AttachmentOnlyAction),
        }
    }

    pub fn with_ops(mut self, ops: PassOps) -> Self {
        debug_assert!(!ops.color.is_empty(), "RenderPass '{}' has no color output", self.name);
        self.ops = ops;
        self
    }

    /// Mark the pass as sampling cubemaps
    ///
    /// A non-cubemap pass with this flag ends the current run of cubemap
    /// face writes, so the last face before it keeps its mipmap generation.
    pub fn with_requires_cubemaps(mut self, requires_cubemaps: bool) -> Self {
        self.requires_cubemaps = requires_cubemaps;
        self
    }

    pub fn with_action<A>(mut self, action: A) -> Self
    where
        A: PassAction<Ctx> + 'static,
    {
        self.action = Box::new(action);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> PassTarget {
        self.target
    }

    /// Requested ops, as submitted
    pub fn ops(&self) -> &PassOps {
        &self.ops
    }

    pub fn requires_cubemaps(&self) -> bool {
        self.requires_cubemaps
    }

    pub(crate) fn action_mut(&mut self) -> &mut dyn PassAction<Ctx> {
        self.action.as_mut()
    }
}

impl<Ctx> fmt::Debug for RenderPass<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPass")
            .field("name", &self.name)
            .field("target", &self.target)
            .field("ops", &self.ops)
            .field("requires_cubemaps", &self.requires_cubemaps)
            .finish_non_exhaustive()
    }
}
