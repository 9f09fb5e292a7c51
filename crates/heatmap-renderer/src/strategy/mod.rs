//! Per-pixel value functions.
//!
//! The accumulator only depends on [`RenderStrategy`]; built-in strategies
//! are selected through [`StrategyKind`] so they can come from configuration.

mod density;
mod weighted_average;

pub use density::Density;
pub use weighted_average::WeightedAverage;

use heatmap_common::{Point, StrategyKind};

/// Computes the raw value of one pixel.
///
/// Implementations see the full point set, not only the point whose window
/// triggered the render, so the result must not depend on which point that
/// was. They must return `TRANSPARENT` when no point influences the pixel.
pub trait RenderStrategy: Send + Sync {
    fn render(&self, lat: f64, lng: f64, points: &[Point], effect_distance: f64) -> f64;
}

impl<S: RenderStrategy + ?Sized> RenderStrategy for &S {
    fn render(&self, lat: f64, lng: f64, points: &[Point], effect_distance: f64) -> f64 {
        (**self).render(lat, lng, points, effect_distance)
    }
}

impl RenderStrategy for StrategyKind {
    fn render(&self, lat: f64, lng: f64, points: &[Point], effect_distance: f64) -> f64 {
        match self {
            StrategyKind::Density => Density.render(lat, lng, points, effect_distance),
            StrategyKind::WeightedAverage => {
                WeightedAverage.render(lat, lng, points, effect_distance)
            }
        }
    }
}

/// Linear falloff weight of every point within `effect_distance` of `(lat, lng)`.
///
/// Points farther away (or at a NaN distance) are skipped.
pub(crate) fn weighted_points<'a>(
    lat: f64,
    lng: f64,
    points: &'a [Point],
    effect_distance: f64,
) -> impl Iterator<Item = (&'a Point, f64)> + 'a {
    points.iter().filter_map(move |point| {
        let dist = point.planar_distance(lat, lng);
        if dist.is_nan() || dist > effect_distance {
            return None;
        }
        Some((point, 1.0 - dist / effect_distance))
    })
}
