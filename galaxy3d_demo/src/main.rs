//! Galaxy3D frame graph demo
//!
//! Builds a typical frame (environment cubemap capture, G-buffer, lighting,
//! post-processing, presentation), renders it twice and dumps the resolved
//! attachment ops through the engine logger.

use galaxy_3d_frame_graph::galaxy3d::{Engine, Error, FrameGraph, Result};
use galaxy_3d_frame_graph::galaxy3d::frame_graph::{
    ColorAttachmentOps, CustomAction, DepthStencilOps, PassOps, PassTarget, RenderPass,
};
use galaxy_3d_frame_graph::galaxy3d::target::{
    RenderTargetDesc, RenderTargetHandle, TextureDesc, TextureKind,
};

/// Render context: counts what the passes would have recorded
#[derive(Default)]
struct FrameStats {
    passes: u32,
    stores: u32,
    mipmap_generations: u32,
}

fn count_pass(ops: &PassOps, stats: &mut FrameStats) -> Result<()> {
    stats.passes += 1;
    stats.stores += ops.color.iter().filter(|c| c.store).count() as u32;
    stats.mipmap_generations += ops.color.iter().filter(|c| c.mipmaps).count() as u32;
    Ok(())
}

struct Targets {
    env_faces: [RenderTargetHandle; 6],
    gbuffer: RenderTargetHandle,
    hdr: RenderTargetHandle,
}

fn create_targets() -> Result<Targets> {
    Engine::create_target_manager()?;
    let targets = Engine::target_manager()?;
    let mut tm = targets.lock()
        .map_err(|_| Error::BackendError("TargetManager lock poisoned".to_string()))?;

    let env = tm.create_texture(
        TextureDesc::new("env", 512, 512, TextureKind::Cubemap).with_mip_levels(10),
    )?;
    let albedo = tm.create_texture(TextureDesc::new("albedo", 1920, 1080, TextureKind::Texture2D))?;
    let hdr = tm.create_texture(TextureDesc::new("hdr", 1920, 1080, TextureKind::Texture2D))?;

    let env_faces = tm.create_cubemap_face_targets(env, 0)?;
    let gbuffer = tm.create_render_target(RenderTargetDesc::new("gbuffer").with_color_texture(albedo))?;
    let hdr = tm.create_render_target(RenderTargetDesc::new("hdr").with_color_texture(hdr))?;

    Ok(Targets { env_faces, gbuffer, hdr })
}

fn build_frame(graph: &mut FrameGraph<FrameStats>, targets: &Targets) {
    let clear = ColorAttachmentOps::new().with_clear([0.0, 0.0, 0.0, 1.0]);

    for (face, handle) in targets.env_faces.iter().enumerate() {
        graph.add_render_pass(RenderPass::new(&format!("env_face{}", face), *handle)
            .with_ops(PassOps::new(clear.with_mipmaps(true)))
            .with_action(CustomAction::new(count_pass)));
    }

    graph.add_render_pass(RenderPass::new("gbuffer", targets.gbuffer)
        .with_ops(PassOps::with_color_outputs(vec![clear; 3])
            .with_depth_stencil(DepthStencilOps::new().with_clear_depth(1.0)))
        .with_action(CustomAction::new(count_pass)));

    graph.add_render_pass(RenderPass::new("lighting", targets.hdr)
        .with_ops(PassOps::new(clear))
        .with_requires_cubemaps(true)
        .with_action(CustomAction::new(count_pass)));

    graph.add_render_pass(RenderPass::new("transparent", targets.hdr)
        .with_ops(PassOps::new(ColorAttachmentOps::new()))
        .with_action(CustomAction::new(count_pass)));

    graph.add_render_pass(RenderPass::new("present", PassTarget::Screen)
        .with_ops(PassOps::new(clear.with_resolve(true)))
        .with_action(CustomAction::new(count_pass)));
}

fn main() -> Result<()> {
    Engine::initialize()?;
    let targets = create_targets()?;

    let mut graph = FrameGraph::with_capacity(16);

    for frame in 0..2 {
        graph.reset();
        build_frame(&mut graph, &targets);

        let mut stats = FrameStats::default();
        graph.render(&mut stats)?;
        graph.log_frame();

        println!(
            "Frame {}: {} passes, {} stored attachments, {} mipmap generations",
            frame, stats.passes, stats.stores, stats.mipmap_generations
        );
    }

    Engine::shutdown();
    Ok(())
}
