/// Frame graph: the ordered list of render passes of one frame.
///
/// Passes are submitted in execution order with `add_render_pass()`.
/// `compile()` resolves the attachment ops each pass actually needs:
///
/// - a pass that loads a target keeps the previous writer's content stored
/// - only the last of consecutive writes to one cubemap regenerates mipmaps
/// - passes presenting to the screen always store and never resolve
///
/// Compilation is a single forward scan. Passes are never reordered or
/// dropped, and requested ops are left untouched; resolved ops live in a
/// parallel array indexed by pass position.

use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::target::TextureKey;
use crate::{engine_debug, engine_error, engine_trace};
use super::attachment_ops::PassOps;
use super::render_pass::{PassHandle, PassTarget, RenderPass, TargetId};

pub struct FrameGraph<Ctx> {
    /// Passes in submission order
    passes: Vec<RenderPass<Ctx>>,
    /// Resolved ops of the last compile, one entry per pass
    compiled: Vec<PassOps>,
    /// Last writer of each tracked target. Only populated during compile().
    scratch: FxHashMap<TargetId, usize>,
}

impl<Ctx> FrameGraph<Ctx> {
    pub fn new() -> Self {
        Self {
            passes: Vec::new(),
            compiled: Vec::new(),
            scratch: FxHashMap::default(),
        }
    }

    /// Frame graph with room for `capacity` passes and tracked targets
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            passes: Vec::with_capacity(capacity),
            compiled: Vec::with_capacity(capacity),
            scratch: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Append a pass at the end of the frame
    pub fn add_render_pass(&mut self, pass: RenderPass<Ctx>) -> PassHandle {
        debug_assert!(!pass.ops().color.is_empty(),
            "RenderPass '{}' has no color output", pass.name());
        let handle = PassHandle(self.passes.len());
        self.passes.push(pass);
        handle
    }

    /// Remove every pass, ready for the next frame
    pub fn reset(&mut self) {
        self.passes.clear();
        self.compiled.clear();
    }

    pub fn passes(&self) -> &[RenderPass<Ctx>] {
        &self.passes
    }

    pub fn pass(&self, handle: PassHandle) -> Option<&RenderPass<Ctx>> {
        self.passes.get(handle.0)
    }

    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Resolved ops of the last `compile()`
    ///
    /// Stale (or shorter than `passes()`) if passes were added since.
    pub fn compiled_ops(&self) -> &[PassOps] {
        &self.compiled
    }

    /// Resolve the attachment ops of every pass
    ///
    /// Idempotent: compiling twice without changing the passes yields the
    /// same ops. Never fails; malformed passes trip debug assertions only.
    pub fn compile(&mut self) -> &[PassOps] {
        debug_assert!(self.scratch.is_empty(), "FrameGraph scratch map not cleared");

        self.compiled.clear();
        self.compiled.extend(self.passes.iter().map(|pass| pass.ops().clone()));

        let mut cube_run: Option<(TextureKey, usize)> = None;
        let mut suppressed_mipmaps = 0usize;

        for (index, pass) in self.passes.iter().enumerate() {
            let target = pass.target();

            // Store ops
            if let Some(id) = target.id() {
                if let Some(previous) = self.scratch.insert(id, index) {
                    propagate_store(&mut self.compiled, previous, index);
                }
            }

            // Cubemap faces
            match target.color_texture() {
                Some(texture) if texture.is_cubemap => {
                    if let Some((run_texture, run_pass)) = cube_run {
                        if run_texture == texture.key {
                            for color in &mut self.compiled[run_pass].color {
                                color.mipmaps = false;
                            }
                            suppressed_mipmaps += 1;
                        }
                    }
                    cube_run = Some((texture.key, index));
                }
                _ if pass.requires_cubemaps() => cube_run = None,
                _ => {}
            }

            // Screen
            if target.is_screen() {
                for color in &mut self.compiled[index].color {
                    color.store = true;
                    color.resolve = false;
                    color.mipmaps = false;
                }
            }
        }

        engine_debug!("galaxy3d::FrameGraph",
            "Compiled {} pass(es), {} tracked target(s), {} cubemap mipmap pass(es) deferred",
            self.passes.len(), self.scratch.len(), suppressed_mipmaps);

        self.scratch.clear();
        &self.compiled
    }

    /// Compile, then execute every pass action in order
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a pass action, unchanged. Later
    /// passes are not executed.
    pub fn render(&mut self, ctx: &mut Ctx) -> Result<()> {
        self.compile();

        for (index, (pass, ops)) in self.passes.iter_mut().zip(&self.compiled).enumerate() {
            if let Err(err) = pass.action_mut().execute(ops, ctx) {
                engine_error!("galaxy3d::FrameGraph",
                    "Pass {} '{}' failed: {}", index, pass.name(), err);
                return Err(err);
            }
        }

        Ok(())
    }

    /// Trace the resolved ops of every pass
    pub fn log_frame(&self) {
        for (index, (pass, ops)) in self.passes.iter().zip(&self.compiled).enumerate() {
            let target = match pass.target() {
                PassTarget::Untracked => "untracked".to_string(),
                PassTarget::Screen => "screen".to_string(),
                PassTarget::Target(handle) => format!("{:?}", handle.key()),
            };
            let colors: Vec<String> = ops.color.iter()
                .map(|c| format!("{:?}/{:?}{}{}",
                    c.load_op(), c.store_op(),
                    if c.resolve { " +resolve" } else { "" },
                    if c.mipmaps { " +mipmaps" } else { "" }))
                .collect();
            let ds = &ops.depth_stencil;
            engine_trace!("galaxy3d::FrameGraph",
                "#{} '{}' -> {} color=[{}] depth={:?}/{:?} stencil={:?}/{:?}",
                index, pass.name(), target, colors.join(", "),
                ds.depth_load_op(), ds.depth_store_op(),
                ds.stencil_load_op(), ds.stencil_store_op());
        }
    }

    #[cfg(test)]
    pub(crate) fn scratch_len(&self) -> usize {
        self.scratch.len()
    }
}

impl<Ctx> Default for FrameGraph<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep what `previous` wrote if `current` loads it
fn propagate_store(compiled: &mut [PassOps], previous: usize, current: usize) {
    let (head, tail) = compiled.split_at_mut(current);
    let prev = &mut head[previous];
    let cur = &tail[0];

    debug_assert_eq!(prev.color.len(), cur.color.len(),
        "Passes #{} and #{} write the same target with different color output counts",
        previous, current);

    for (prev_color, cur_color) in prev.color.iter_mut().zip(&cur.color) {
        if !cur_color.clear {
            prev_color.store = true;
        }
    }
    if !cur.depth_stencil.clear_depth {
        prev.depth_stencil.store_depth = true;
    }
    if !cur.depth_stencil.clear_stencil {
        prev.depth_stencil.store_stencil = true;
    }
}

#[cfg(test)]
#[path = "frame_graph_tests.rs"]
mod tests;
