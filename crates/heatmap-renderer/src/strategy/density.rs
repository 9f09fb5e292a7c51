use heatmap_common::{Point, TRANSPARENT};

use super::{weighted_points, RenderStrategy};

/// Sums nearby point values, each weighted by a linear falloff that reaches
/// zero at the effect distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Density;

impl RenderStrategy for Density {
    fn render(&self, lat: f64, lng: f64, points: &[Point], effect_distance: f64) -> f64 {
        let mut value = 0.0;
        let mut any = false;

        for (point, weight) in weighted_points(lat, lng, points, effect_distance) {
            any = true;
            value += point.value * weight;
        }

        if any {
            value
        } else {
            TRANSPARENT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_falloff() {
        let points = [Point::new(0.0, 0.0, 8.0)];
        assert_eq!(Density.render(0.0, 0.0, &points, 2.0), 8.0);
        assert_eq!(Density.render(0.0, 1.0, &points, 2.0), 4.0);
        assert_eq!(Density.render(0.0, 2.0, &points, 2.0), 0.0);
        assert_eq!(Density.render(0.0, 2.5, &points, 2.0), TRANSPARENT);
    }

    #[test]
    fn test_sums_overlapping_points() {
        let points = [Point::new(0.0, 0.0, 2.0), Point::new(0.0, 2.0, 6.0)];
        // 2 * 0.5 + 6 * 0.5
        assert_eq!(Density.render(0.0, 1.0, &points, 2.0), 4.0);
    }

    #[test]
    fn test_negative_values_can_cancel() {
        let points = [Point::new(0.0, 0.0, 3.0), Point::new(0.0, 0.0, -3.0)];
        assert_eq!(Density.render(0.0, 0.0, &points, 1.0), 0.0);
    }
}
