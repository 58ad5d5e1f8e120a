//! Integration tests for a complete frame
//!
//! Builds a realistic frame (environment capture, G-buffer, lighting,
//! post-processing, presentation) with targets from the Engine's target
//! manager, then checks the ops every pass received.
//!
//! Run with: cargo test --test frame_graph_integration_tests

use galaxy_3d_frame_graph::galaxy3d::{Engine, Error, FrameGraph};
use galaxy_3d_frame_graph::galaxy3d::frame_graph::{
    ColorAttachmentOps, CustomAction, DepthStencilOps, LoadOp, PassAction, PassOps,
    PassTarget, RenderPass, StoreOp,
};
use galaxy_3d_frame_graph::galaxy3d::target::{
    RenderTargetDesc, RenderTargetHandle, TextureDesc, TextureKind,
};
use galaxy_3d_frame_graph::galaxy3d::Result;
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Render context recording every executed pass
#[derive(Default)]
struct FrameRecorder {
    passes: Vec<(&'static str, PassOps)>,
}

impl FrameRecorder {
    fn ops(&self, name: &str) -> &PassOps {
        &self.passes.iter().find(|(n, _)| *n == name).expect("pass executed").1
    }
}

/// Named recording action
struct Record(&'static str);

impl PassAction<FrameRecorder> for Record {
    fn execute(&mut self, ops: &PassOps, ctx: &mut FrameRecorder) -> Result<()> {
        ctx.passes.push((self.0, ops.clone()));
        Ok(())
    }
}

struct FrameTargets {
    env_faces: [RenderTargetHandle; 6],
    gbuffer: RenderTargetHandle,
    hdr: RenderTargetHandle,
}

fn create_targets() -> FrameTargets {
    Engine::initialize().unwrap();
    Engine::shutdown();
    Engine::create_target_manager().unwrap();

    let targets = Engine::target_manager().unwrap();
    let mut tm = targets.lock().unwrap();

    let env = tm.create_texture(TextureDesc::new("env", 256, 256, TextureKind::Cubemap).with_mip_levels(9)).unwrap();
    let albedo = tm.create_texture(TextureDesc::new("albedo", 1280, 720, TextureKind::Texture2D)).unwrap();
    let hdr = tm.create_texture(TextureDesc::new("hdr", 1280, 720, TextureKind::Texture2D).with_mip_levels(4)).unwrap();

    let frame_targets = FrameTargets {
        env_faces: tm.create_cubemap_face_targets(env, 0).unwrap(),
        gbuffer: tm.create_render_target(RenderTargetDesc::new("gbuffer").with_color_texture(albedo)).unwrap(),
        hdr: tm.create_render_target(RenderTargetDesc::new("hdr").with_color_texture(hdr)).unwrap(),
    };
    frame_targets
}

const FACES: [&str; 6] = ["env+x", "env-x", "env+y", "env-y", "env+z", "env-z"];

fn build_frame(graph: &mut FrameGraph<FrameRecorder>, targets: &FrameTargets) {
    for (face, handle) in targets.env_faces.iter().enumerate() {
        graph.add_render_pass(RenderPass::new(FACES[face], *handle)
            .with_ops(PassOps::new(ColorAttachmentOps::new().with_clear([0.0; 4]).with_mipmaps(true)))
            .with_action(Record(FACES[face])));
    }

    graph.add_render_pass(RenderPass::new("gbuffer", targets.gbuffer)
        .with_ops(PassOps::with_color_outputs(vec![ColorAttachmentOps::new().with_clear([0.0; 4]); 3])
            .with_depth_stencil(DepthStencilOps::new().with_clear_depth(1.0).with_clear_stencil(0)))
        .with_action(Record("gbuffer")));

    graph.add_render_pass(RenderPass::new("decals", targets.gbuffer)
        .with_ops(PassOps::with_color_outputs(vec![ColorAttachmentOps::new(); 3])
            .with_depth_stencil(DepthStencilOps::new().with_clear_stencil(0)))
        .with_action(Record("decals")));

    graph.add_render_pass(RenderPass::new("lighting", targets.hdr)
        .with_ops(PassOps::new(ColorAttachmentOps::new().with_clear([0.0; 4]).with_resolve(true)))
        .with_requires_cubemaps(true)
        .with_action(Record("lighting")));

    graph.add_render_pass(RenderPass::new("transparent", targets.hdr)
        .with_ops(PassOps::new(ColorAttachmentOps::new().with_mipmaps(true)))
        .with_action(Record("transparent")));

    graph.add_render_pass(RenderPass::new("tonemap", PassTarget::Screen)
        .with_ops(PassOps::new(ColorAttachmentOps::new().with_clear([0.0; 4]).with_resolve(true)))
        .with_action(Record("tonemap")));

    graph.add_render_pass(RenderPass::new("ui", PassTarget::Screen)
        .with_action(Record("ui")));
}

// ============================================================================
// FULL FRAME TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_full_frame() {
    let targets = create_targets();
    let mut graph = FrameGraph::new();
    build_frame(&mut graph, &targets);

    let mut ctx = FrameRecorder::default();
    graph.render(&mut ctx).unwrap();

    // Execution order is submission order
    let order: Vec<&str> = ctx.passes.iter().map(|(n, _)| *n).collect();
    let mut expected: Vec<&str> = FACES.to_vec();
    expected.extend(["gbuffer", "decals", "lighting", "transparent", "tonemap", "ui"]);
    assert_eq!(order, expected);

    // Only the last cubemap face regenerates mipmaps
    for face in &FACES[..5] {
        assert!(!ctx.ops(face).color[0].mipmaps, "{} should defer mipmaps", face);
    }
    assert!(ctx.ops("env-z").color[0].mipmaps);

    // Decals load every G-buffer slot and the depth
    let gbuffer = ctx.ops("gbuffer");
    assert!(gbuffer.color.iter().all(|c| c.store_op() == StoreOp::Store));
    assert_eq!(gbuffer.depth_stencil.depth_store_op(), StoreOp::Store);
    assert_eq!(gbuffer.depth_stencil.stencil_store_op(), StoreOp::DontCare);

    // Transparent loads the lit HDR buffer
    let lighting = ctx.ops("lighting");
    assert_eq!(lighting.color[0].load_op(), LoadOp::Clear);
    assert_eq!(lighting.color[0].store_op(), StoreOp::Store);
    assert!(lighting.color[0].resolve);
    assert!(ctx.ops("transparent").color[0].mipmaps);

    // Screen passes store and never resolve
    for name in ["tonemap", "ui"] {
        let c = ctx.ops(name).color[0];
        assert_eq!(c.store_op(), StoreOp::Store);
        assert!(!c.resolve);
        assert!(!c.mipmaps);
    }
    assert_eq!(ctx.ops("tonemap").color[0].load_op(), LoadOp::Clear);

    Engine::shutdown();
}

#[test]
#[serial]
fn test_integration_consecutive_frames() {
    let targets = create_targets();
    let mut graph = FrameGraph::new();

    let mut first = FrameRecorder::default();
    build_frame(&mut graph, &targets);
    graph.render(&mut first).unwrap();

    // Next frame: rebuild from scratch
    graph.reset();
    assert!(graph.is_empty());
    build_frame(&mut graph, &targets);
    let mut second = FrameRecorder::default();
    graph.render(&mut second).unwrap();

    assert_eq!(first.passes, second.passes);

    Engine::shutdown();
}

#[test]
#[serial]
fn test_integration_frame_stops_on_failed_pass() {
    let targets = create_targets();
    let mut graph = FrameGraph::new();
    graph.add_render_pass(RenderPass::new("gbuffer", targets.gbuffer).with_action(Record("gbuffer")));
    graph.add_render_pass(RenderPass::new("lighting", targets.hdr)
        .with_action(CustomAction::new(|_ops: &PassOps, _ctx: &mut FrameRecorder| {
            Err(Error::PassFailed("pipeline missing".to_string()))
        })));
    graph.add_render_pass(RenderPass::new("present", PassTarget::Screen).with_action(Record("present")));

    let mut ctx = FrameRecorder::default();
    let result = graph.render(&mut ctx);

    assert!(matches!(result, Err(Error::PassFailed(ref msg)) if msg == "pipeline missing"));
    assert_eq!(ctx.passes.len(), 1);

    Engine::shutdown();
}
