//! Heatmap rasterisation of weighted geographic points.
//!
//! Pipeline:
//! - [`transform`]: lat/lng to pixel mapping over the output bounds
//! - [`window`]: pixel region each point can influence
//! - [`mod@accumulate`]: at-most-once rendering of every touched pixel
//! - [`strategy`]: per-pixel value functions (density, weighted average)
//! - [`mod@scale`]: raw values to discrete levels

pub mod accumulate;
pub mod grid;
pub mod heatmap;
pub mod scale;
pub mod strategy;
pub mod transform;
pub mod window;

pub use accumulate::{accumulate, PixelAccumulator};
pub use grid::{LevelGrid, PixelGrid, RawGrid};
pub use heatmap::{render_heatmap, Heatmap};
pub use scale::scale;
pub use strategy::{Density, RenderStrategy, WeightedAverage};
pub use transform::CoordinateTransform;
pub use window::EffectWindow;
