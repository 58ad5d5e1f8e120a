/// Frame graph module
///
/// Per-frame render pass scheduling: passes, their attachment ops and the
/// compiler that resolves them.

pub mod attachment_ops;
pub mod pass_action;
pub mod render_pass;
pub mod frame_graph;

pub use attachment_ops::{ColorAttachmentOps, DepthStencilOps, LoadOp, PassOps, StoreOp};
pub use pass_action::{AttachmentOnlyAction, CustomAction, PassAction};
pub use render_pass::{PassHandle, PassTarget, RenderPass};
pub use frame_graph::FrameGraph;
