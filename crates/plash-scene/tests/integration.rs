//! Integration tests for WallpaperEngine
//!
//! These tests drive the engine the way the page does:
//! - Query parsing into a configuration
//! - Frame stepping for each variant
//! - Adaptive speed polling, including failed polls
//! - Window resizes

use plash_scene::speed::parse_sample;
use plash_scene::starfield::FLOATS_PER_STAR;
use plash_scene::{
    Rng, SpeedMode, SpeedSample, Variant, Viewport, WallpaperConfig, WallpaperEngine,
};

fn engine_for(query: &[(&str, &str)], seed: u64) -> WallpaperEngine {
    let (config, warnings) = WallpaperConfig::from_query_pairs(query.iter().copied());
    assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
    WallpaperEngine::new(&config, Viewport::new(1280.0, 720.0, 1.0), Rng::seeded(seed))
}

// =============================================================================
// Starfield Tests
// =============================================================================

#[test]
fn test_starfield_buffer_lengths_constant_across_frames() {
    let mut engine = engine_for(&[("variant", "starfield")], 1);
    let count = engine.starfield().unwrap().stars().len();
    assert_eq!(count, 8000);

    for _ in 0..300 {
        engine.tick(1.0 / 60.0);
        let field = engine.starfield().unwrap();
        assert_eq!(field.positions().len(), count * FLOATS_PER_STAR);
        assert_eq!(field.colors().len(), count * FLOATS_PER_STAR);
        assert_eq!(field.line_vertices().len(), count * 2);
    }
}

#[test]
fn test_starfield_recycling_is_deterministic() {
    let mut a = engine_for(&[("variant", "starfield")], 42);
    let mut b = engine_for(&[("variant", "starfield")], 42);

    let mut total = 0;
    for _ in 0..400 {
        let fa = a.tick(1.0 / 60.0);
        let fb = b.tick(1.0 / 60.0);
        assert_eq!(fa.recycled, fb.recycled);
        total += fa.recycled;
    }

    // 400 frames at 2.5 units/frame covers the whole depth range
    assert!(total > 0);
    assert_eq!(a.starfield().unwrap().positions(), b.starfield().unwrap().positions());
}

#[test]
fn test_starfield_stars_stay_behind_threshold() {
    let mut engine = engine_for(&[("variant", "starfield")], 9);
    for _ in 0..200 {
        engine.tick(1.0 / 60.0);
    }

    let field = engine.starfield().unwrap();
    let threshold = field.recycle_threshold();
    assert!(field.stars().iter().all(|s| s.z <= threshold));
}

// =============================================================================
// Adaptive Speed Tests
// =============================================================================

#[test]
fn test_adaptive_speed_converges_monotonically() {
    let mut engine = engine_for(&[("mode", "adaptive")], 3);
    assert_eq!(engine.speed().mode(), SpeedMode::Adaptive);
    assert_eq!(engine.speed().current(), 5.0);

    assert!(engine.apply_speed_sample(SpeedSample { speed: 10.0 }));
    assert_eq!(engine.speed().target(), 20.0);

    let mut previous = engine.speed().current();
    for _ in 0..200 {
        let frame = engine.tick(1.0 / 60.0);
        assert!(frame.speed >= previous);
        assert!(frame.speed <= 20.0);
        previous = frame.speed;
    }
    assert!((previous - 20.0).abs() < 0.01);
}

#[test]
fn test_adaptive_speed_eases_down_to_lower_target() {
    let mut engine = engine_for(&[("mode", "adaptive")], 3);
    assert!(engine.apply_speed_sample(SpeedSample { speed: 0.1 }));
    assert_eq!(engine.speed().target(), 0.5);

    let mut previous = engine.speed().current();
    for _ in 0..200 {
        let frame = engine.tick(1.0 / 60.0);
        assert!(frame.speed <= previous);
        assert!(frame.speed >= 0.5);
        previous = frame.speed;
    }
    assert!((previous - 0.5).abs() < 0.01);
}

#[test]
fn test_adaptive_speed_applies_floor() {
    let mut engine = engine_for(&[("mode", "adaptive")], 3);
    let sample = parse_sample(r#"{"speed": 0.0}"#).unwrap();
    engine.apply_speed_sample(sample);
    assert_eq!(engine.speed().target(), 0.5);
}

#[test]
fn test_failed_fetch_changes_nothing() {
    let mut engine = engine_for(&[("mode", "adaptive")], 5);
    engine.apply_speed_sample(SpeedSample { speed: 4.0 });
    for _ in 0..10 {
        engine.tick(1.0 / 60.0);
    }

    let before = engine.speed().clone();
    engine.speed_fetch_failed();
    assert_eq!(engine.speed(), &before);

    // Garbage bodies never reach the engine
    assert!(parse_sample("<html>502</html>").is_err());
    assert!(parse_sample(r#"{"rate": 3}"#).is_err());
    assert_eq!(engine.speed(), &before);
}

#[test]
fn test_default_mode_ignores_samples() {
    let mut engine = engine_for(&[], 5);
    assert!(!engine.apply_speed_sample(SpeedSample { speed: 100.0 }));

    let frame = engine.tick(1.0 / 60.0);
    assert_eq!(frame.speed, 5.0);
    assert!((frame.time - 0.05).abs() < 1e-6);
}

#[test]
fn test_scene_time_scales_with_speed() {
    let mut slow = engine_for(&[("variant", "gradient")], 1);
    let mut fast = engine_for(&[("variant", "starburst")], 1);

    for _ in 0..100 {
        slow.tick(1.0 / 60.0);
        fast.tick(1.0 / 60.0);
    }

    // 0.01 per frame times the speed (1.0 and 5.0)
    assert!((slow.time() - 1.0).abs() < 1e-3);
    assert!((fast.time() - 5.0).abs() < 1e-3);
}

// =============================================================================
// Resize Tests
// =============================================================================

#[test]
fn test_resize_updates_projection_only() {
    let mut engine = engine_for(&[("variant", "starfield")], 11);
    engine.tick(1.0 / 60.0);

    let positions_before = engine.starfield().unwrap().positions().to_vec();
    let time_before = engine.time();

    engine.resize(Viewport::new(800.0, 800.0, 3.0));

    assert_eq!(engine.viewport().pixel_ratio, 2.0);
    assert!((engine.camera().aspect - 1.0).abs() < 1e-6);
    assert_eq!(engine.viewport().physical_size(), (1600, 1600));
    assert_eq!(engine.starfield().unwrap().positions(), positions_before.as_slice());
    assert_eq!(engine.time(), time_before);
}

#[test]
fn test_starburst_instances_untouched_by_frames() {
    let mut engine = engine_for(&[], 21);
    let before = engine.starburst().unwrap().instances().to_vec();
    assert_eq!(before.len(), 350);

    for _ in 0..60 {
        engine.tick(1.0 / 60.0);
    }
    engine.resize(Viewport::new(640.0, 480.0, 1.0));

    assert_eq!(engine.starburst().unwrap().instances(), before.as_slice());
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_config_query_round_trip_into_engine() {
    let (config, warnings) = WallpaperConfig::from_query_pairs([
        ("variant", "Gradient"),
        ("mode", "adaptive"),
        ("poll_ms", "20"),
        ("unknown", "whatever"),
    ]);
    assert!(warnings.is_empty());
    assert_eq!(config.variant, Variant::Gradient);
    assert_eq!(config.poll_interval_ms, 100);
    assert!(config.polls_speed());
    assert_eq!(config.overlay, None);

    let engine = WallpaperEngine::new(&config, Viewport::new(100.0, 100.0, 1.0), Rng::seeded(0));
    assert_eq!(engine.variant(), Variant::Gradient);
    assert!(engine.gradient().is_some());
    assert!(engine.starburst().is_none());
    assert!(engine.starfield().is_none());
}

#[test]
fn test_config_malformed_values_fall_back() {
    let (config, warnings) = WallpaperConfig::from_query_pairs([
        ("variant", "plasma"),
        ("mode", "warp"),
        ("poll_ms", "soon"),
    ]);
    assert_eq!(warnings.len(), 3);
    assert_eq!(config, WallpaperConfig::default());
}

#[test]
fn test_fps_reported_after_sample_interval() {
    let mut engine = engine_for(&[], 2);
    let mut reading = None;
    for _ in 0..40 {
        if let Some(fps) = engine.tick(1.0 / 60.0).fps {
            reading = Some(fps);
            break;
        }
    }
    let fps = reading.unwrap();
    assert!((59..=61).contains(&fps));
}
