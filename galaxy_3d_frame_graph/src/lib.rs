/*!
# Galaxy 3D Frame Graph

Per-frame render pass scheduling for the Galaxy 3D rendering engine.

Passes are submitted in execution order. Before they run, the frame graph
resolves the attachment ops each one actually needs, so targets are not
stored, resolved or mipmapped more often than the frame requires.

## Architecture

- **FrameGraph**: Ordered pass list, compiler and executor
- **RenderPass**: Target, requested attachment ops and `PassAction`
- **TargetManager**: Registry of textures and render targets (stable keys)
- **Engine**: Singleton holding the target manager and the logger
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod target;
pub mod frame_graph;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Frame graph core
    pub use crate::frame_graph::FrameGraph;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Frame graph sub-module
    pub mod frame_graph {
        pub use crate::frame_graph::*;
    }

    // Target sub-module
    pub mod target {
        pub use crate::target::*;
    }
}
