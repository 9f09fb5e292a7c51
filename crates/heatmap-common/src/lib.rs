//! Common types shared by the heatmap rendering crates.

pub mod bounds;
pub mod constants;
pub mod error;
pub mod options;
pub mod point;

pub use bounds::Bounds;
pub use constants::{MAX_LEVEL, MIN_LEVEL, TRANSPARENT, UNPROCESSED};
pub use error::{HeatmapError, HeatmapResult};
pub use options::{RenderOptions, StrategyKind, DEFAULT_EFFECT_DISTANCE};
pub use point::Point;
