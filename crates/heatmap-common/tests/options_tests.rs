//! Tests for RenderOptions loading and validation.

use heatmap_common::{HeatmapError, RenderOptions, StrategyKind, DEFAULT_EFFECT_DISTANCE};
use test_utils::{temp_test_dir, write_test_file};

// ============================================================================
// JSON loading
// ============================================================================

#[test]
fn test_defaults_applied() {
    let options = RenderOptions::from_json(r#"{"width": 64, "height": 32}"#).unwrap();
    assert_eq!(options, RenderOptions::new(64, 32));
    assert_eq!(options.effect_distance, DEFAULT_EFFECT_DISTANCE);
    assert!(!options.parallel);
}

#[test]
fn test_all_fields() {
    let json = r#"{
        "width": 100,
        "height": 50,
        "effect_distance": 0.25,
        "strategy": "weighted_average",
        "parallel": true,
        "prefilter_points": false
    }"#;
    let options = RenderOptions::from_json(json).unwrap();
    assert_eq!(options.effect_distance, 0.25);
    assert_eq!(options.strategy, StrategyKind::WeightedAverage);
    assert!(options.parallel);
    assert!(!options.prefilter_points);
}

#[test]
fn test_missing_dimensions_is_config_error() {
    let result = RenderOptions::from_json(r#"{"effect_distance": 1.0}"#);
    assert!(matches!(result, Err(HeatmapError::Config(_))));
}

#[test]
fn test_unknown_strategy_is_config_error() {
    let result = RenderOptions::from_json(r#"{"width": 1, "height": 1, "strategy": "kriging"}"#);
    assert!(matches!(result, Err(HeatmapError::Config(_))));
}

#[test]
fn test_from_json_validates() {
    let result = RenderOptions::from_json(r#"{"width": 10, "height": 10, "effect_distance": -1}"#);
    assert!(matches!(result, Err(HeatmapError::InvalidParameter { .. })));
}

// ============================================================================
// File loading
// ============================================================================

#[test]
fn test_from_file() {
    let dir = temp_test_dir();
    let path = write_test_file(
        dir.path(),
        "render.json",
        r#"{"width": 256, "height": 256, "effect_distance": 0.05}"#,
    );

    let options = RenderOptions::from_file(&path).unwrap();
    assert_eq!(options.width, 256);
    assert_eq!(options.effect_distance, 0.05);
}

#[test]
fn test_from_missing_file() {
    let dir = temp_test_dir();
    let result = RenderOptions::from_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(HeatmapError::Config(_))));
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_builder_chain() {
    let options = RenderOptions::new(8, 4)
        .with_effect_distance(2.0)
        .with_strategy(StrategyKind::WeightedAverage)
        .with_parallel(true)
        .with_prefilter_points(false);
    assert!(options.validate().is_ok());
    assert_eq!(options.pixel_count(), 32);
}
