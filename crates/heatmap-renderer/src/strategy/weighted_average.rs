use heatmap_common::{Point, TRANSPARENT};

use super::{weighted_points, RenderStrategy};

/// Averages nearby point values, weighting each by the same linear falloff
/// as [`super::Density`].
///
/// Pixels whose only contributors sit exactly on the effect radius have zero
/// total weight and stay transparent.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedAverage;

impl RenderStrategy for WeightedAverage {
    fn render(&self, lat: f64, lng: f64, points: &[Point], effect_distance: f64) -> f64 {
        let (weighted_sum, total_weight) = weighted_points(lat, lng, points, effect_distance)
            .fold((0.0, 0.0), |(sum, total), (point, weight)| {
                (sum + point.value * weight, total + weight)
            });

        if total_weight > 0.0 {
            weighted_sum / total_weight
        } else {
            TRANSPARENT
        }
    }
}
