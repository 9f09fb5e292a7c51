//! Entry point tying the pipeline together.

use heatmap_common::{Bounds, HeatmapResult, Point, RenderOptions};

use crate::accumulate::{accumulate, accumulate_validated};
use crate::grid::{LevelGrid, RawGrid};
use crate::scale::scale;
use crate::strategy::RenderStrategy;
use crate::transform::CoordinateTransform;

/// A validated render request over a borrowed point set.
///
/// ```
/// use heatmap_common::{Bounds, Point, RenderOptions};
/// use heatmap_renderer::Heatmap;
///
/// let points = [Point::new(5.0, 5.0, 9.0)];
/// let options = RenderOptions::new(10, 10).with_effect_distance(6.0);
/// let heatmap = Heatmap::new(&points, Bounds::new(0.0, 0.0, 10.0, 10.0), options).unwrap();
///
/// let levels = heatmap.render();
/// assert_eq!(levels[(5, 5)], 3);
/// assert_eq!(levels[(0, 0)], 0);
/// ```
#[derive(Debug, Clone)]
pub struct Heatmap<'p> {
    points: &'p [Point],
    transform: CoordinateTransform,
    options: RenderOptions,
}

impl<'p> Heatmap<'p> {
    /// Validate the bounds and options. Nothing is allocated on failure.
    pub fn new(points: &'p [Point], bounds: Bounds, options: RenderOptions) -> HeatmapResult<Self> {
        options.validate()?;
        let transform = CoordinateTransform::new(bounds, options.width, options.height)?;
        Ok(Self {
            points,
            transform,
            options,
        })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn bounds(&self) -> &Bounds {
        self.transform.bounds()
    }

    /// Scaled grid using the strategy named in the options.
    pub fn render(&self) -> LevelGrid {
        self.render_with(&self.options.strategy)
    }

    /// Raw grid using the strategy named in the options.
    pub fn render_raw(&self) -> RawGrid {
        self.render_raw_with(&self.options.strategy)
    }

    /// Scaled grid using a caller-supplied strategy.
    pub fn render_with<S: RenderStrategy + ?Sized>(&self, strategy: &S) -> LevelGrid {
        scale(&self.render_raw_with(strategy))
    }

    pub fn render_raw_with<S: RenderStrategy + ?Sized>(&self, strategy: &S) -> RawGrid {
        accumulate_validated(self.points, self.transform, &self.options, strategy)
    }
}

/// Render `points` over `bounds` into a grid of levels in `MIN_LEVEL..=MAX_LEVEL`.
///
/// `strategy` overrides `options.strategy`.
pub fn render_heatmap<S: RenderStrategy + ?Sized>(
    points: &[Point],
    bounds: &Bounds,
    options: &RenderOptions,
    strategy: &S,
) -> HeatmapResult<LevelGrid> {
    let raw = accumulate(points, bounds, options, strategy)?;
    Ok(scale(&raw))
}
