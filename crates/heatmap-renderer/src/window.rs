//! Pixel region a single point can influence.

use std::ops::Range;

/// Half-open square window of pixels, already clipped to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectWindow {
    pub x: Range<usize>,
    pub y: Range<usize>,
}

impl EffectWindow {
    /// Window of `effect_px` pixels on each side of `center`, clipped to
    /// `[0, width) x [0, height)`.
    ///
    /// The centre may lie outside the grid; the window is then partial or empty.
    pub fn around(center: (i64, i64), effect_px: i64, width: usize, height: usize) -> Self {
        let (px, py) = center;
        Self {
            x: clip_span(px, effect_px, width),
            y: clip_span(py, effect_px, height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    /// Number of pixels covered.
    pub fn len(&self) -> usize {
        self.x.len() * self.y.len()
    }

    /// Pixels in scanline order: left to right, top to bottom.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.y
            .clone()
            .flat_map(move |y| self.x.clone().map(move |x| (x, y)))
    }
}

fn clip_span(center: i64, radius: i64, limit: usize) -> Range<usize> {
    let limit = limit as i64;
    let start = center.saturating_sub(radius).clamp(0, limit);
    let end = center.saturating_add(radius).clamp(0, limit);
    start as usize..end.max(start) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_window() {
        let window = EffectWindow::around((5, 5), 2, 10, 10);
        assert_eq!(window.x, 3..7);
        assert_eq!(window.y, 3..7);
        assert_eq!(window.len(), 16);
    }

    #[test]
    fn test_window_clipped_at_edges() {
        let window = EffectWindow::around((0, 9), 3, 10, 10);
        assert_eq!(window.x, 0..3);
        assert_eq!(window.y, 6..10);
    }

    #[test]
    fn test_window_outside_grid_is_empty() {
        assert!(EffectWindow::around((-20, 5), 3, 10, 10).is_empty());
        assert!(EffectWindow::around((5, 40), 3, 10, 10).is_empty());
        assert!(EffectWindow::around((i64::MIN, i64::MAX), 3, 10, 10).is_empty());
    }

    #[test]
    fn test_pixels_scanline_order() {
        let window = EffectWindow::around((1, 1), 1, 10, 10);
        let pixels: Vec<_> = window.pixels().collect();
        assert_eq!(pixels, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
