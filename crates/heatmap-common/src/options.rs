//! Render options, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// Effect distance used when none is configured, in decimal degrees.
pub const DEFAULT_EFFECT_DISTANCE: f64 = 0.01;

/// Built-in per-pixel render strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Distance-weighted sum of nearby point values.
    #[default]
    Density,
    /// Distance-weighted mean of nearby point values.
    WeightedAverage,
}

/// Options for a single render call.
///
/// `width` and `height` are required; everything else has a default:
///
/// ```
/// use heatmap_common::{RenderOptions, StrategyKind};
///
/// let options = RenderOptions::from_json(r#"{"width": 256, "height": 128}"#).unwrap();
/// assert_eq!(options.effect_distance, 0.01);
/// assert_eq!(options.strategy, StrategyKind::Density);
/// assert!(options.prefilter_points);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Radius in decimal degrees beyond which a point has no influence.
    #[serde(default = "default_effect_distance")]
    pub effect_distance: f64,
    /// Output grid width in pixels.
    pub width: usize,
    /// Output grid height in pixels.
    pub height: usize,
    /// Per-pixel value function.
    #[serde(default)]
    pub strategy: StrategyKind,
    /// Render touched pixels on the rayon pool instead of the calling thread.
    #[serde(default)]
    pub parallel: bool,
    /// Drop points that cannot reach the grid before accumulating.
    #[serde(default = "default_prefilter_points")]
    pub prefilter_points: bool,
}

fn default_effect_distance() -> f64 {
    DEFAULT_EFFECT_DISTANCE
}

fn default_prefilter_points() -> bool {
    true
}

impl RenderOptions {
    /// Options for a `width x height` grid with every other field defaulted.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            effect_distance: DEFAULT_EFFECT_DISTANCE,
            width,
            height,
            strategy: StrategyKind::default(),
            parallel: false,
            prefilter_points: default_prefilter_points(),
        }
    }

    pub fn with_effect_distance(mut self, effect_distance: f64) -> Self {
        self.effect_distance = effect_distance;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_prefilter_points(mut self, prefilter_points: bool) -> Self {
        self.prefilter_points = prefilter_points;
        self
    }

    /// Load options from a JSON string and validate them.
    pub fn from_json(json_str: &str) -> HeatmapResult<Self> {
        let options: Self = serde_json::from_str(json_str)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file and validate them.
    pub fn from_file<P: AsRef<Path>>(path: P) -> HeatmapResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Number of cells in the output grid.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        if !self.effect_distance.is_finite() || self.effect_distance <= 0.0 {
            return Err(HeatmapError::invalid_parameter(
                "effect_distance",
                format!("must be a positive number, got {}", self.effect_distance),
            ));
        }
        if self.width == 0 || self.height == 0 || self.width.checked_mul(self.height).is_none() {
            return Err(HeatmapError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
