//! Integration tests for Engine lifecycle and the target manager singleton
//!
//! Run with: cargo test --test engine_integration_tests

use galaxy_3d_frame_graph::galaxy3d::{Engine, Error};
use galaxy_3d_frame_graph::galaxy3d::target::{RenderTargetDesc, TextureDesc, TextureKind};
use serial_test::serial;

/// Start every test from an initialized engine without a target manager
fn setup() {
    Engine::initialize().unwrap();
    Engine::shutdown();
}

// ============================================================================
// ENGINE LIFECYCLE TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_engine_full_lifecycle() {
    setup();

    // Step 1: Create target manager
    assert!(Engine::create_target_manager().is_ok());

    // Step 2: Register resources through the singleton
    let targets = Engine::target_manager().unwrap();
    {
        let mut tm = targets.lock().unwrap();
        let env = tm.create_texture(TextureDesc::new("env", 256, 256, TextureKind::Cubemap)).unwrap();
        tm.create_cubemap_face_targets(env, 0).unwrap();
        assert_eq!(tm.render_target_count(), 6);
    }

    // Step 3: Same instance on every access
    let again = Engine::target_manager().unwrap();
    assert_eq!(again.lock().unwrap().texture_count(), 1);

    // Step 4: Shutdown drops the singleton
    Engine::shutdown();
    assert!(Engine::target_manager().is_err());

    // Existing Arc stays usable
    assert_eq!(targets.lock().unwrap().render_target_count(), 6);
}

#[test]
#[serial]
fn test_integration_target_manager_twice_fails() {
    setup();
    Engine::create_target_manager().unwrap();

    match Engine::create_target_manager() {
        Err(Error::InitializationFailed(msg)) => assert!(msg.contains("already exists")),
        _ => panic!("Expected InitializationFailed"),
    }

    Engine::shutdown();
}

#[test]
#[serial]
fn test_integration_destroy_and_recreate_target_manager() {
    setup();
    Engine::create_target_manager().unwrap();
    {
        let targets = Engine::target_manager().unwrap();
        targets.lock().unwrap().create_render_target(RenderTargetDesc::new("depth")).unwrap();
    }

    Engine::destroy_target_manager().unwrap();
    Engine::create_target_manager().unwrap();

    let targets = Engine::target_manager().unwrap();
    assert_eq!(targets.lock().unwrap().render_target_count(), 0);

    Engine::shutdown();
}
