/// Pass action trait and implementations.
///
/// Defines what a render pass does once the frame graph has resolved its
/// attachment ops. The frame graph never inspects the context it passes
/// through.

use crate::error::Result;
use super::attachment_ops::PassOps;

/// Action executed by a render pass
///
/// Called by `FrameGraph::render()` after compilation, in pass order.
pub trait PassAction<Ctx>: Send {
    /// Record the pass, using the resolved attachment ops
    fn execute(&mut self, ops: &PassOps, ctx: &mut Ctx) -> Result<()>;
}

/// Custom pass action (closure-based)
///
/// Executes a user-provided closure for full control over what the pass
/// records. Used for scene rendering passes (geometry, shadows, etc.).
pub struct CustomAction<Ctx> {
    callback: Box<dyn FnMut(&PassOps, &mut Ctx) -> Result<()> + Send>,
}

impl<Ctx> CustomAction<Ctx> {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&PassOps, &mut Ctx) -> Result<()> + Send + 'static,
    {
        Self { callback: Box::new(callback) }
    }
}

impl<Ctx> PassAction<Ctx> for CustomAction<Ctx> {
    fn execute(&mut self, ops: &PassOps, ctx: &mut Ctx) -> Result<()> {
        (self.callback)(ops, ctx)
    }
}

/// Attachment-only pass action
///
/// Records nothing. The pass exists only for its load/store effects
/// (e.g. clearing a target).
#[derive(Debug, Default, Clone, Copy)]
pub struct AttachmentOnlyAction;

impl<Ctx> PassAction<Ctx> for AttachmentOnlyAction {
    fn execute(&mut self, _ops: &PassOps, _ctx: &mut Ctx) -> Result<()> {
        Ok(())
    }
}
