//! Windowed accumulation of point influence into a raw grid.
//!
//! Each point only visits the pixels inside its effect window, and each pixel
//! is rendered at most once no matter how many windows overlap it. The render
//! function itself still scans every point; no spatial index is consulted, so
//! touched pixels times point count is the dominant cost.

use std::borrow::Cow;

use heatmap_common::{Bounds, HeatmapResult, Point, RenderOptions};
use rayon::prelude::*;

use crate::grid::{PixelGrid, RawGrid};
use crate::strategy::RenderStrategy;
use crate::transform::CoordinateTransform;
use crate::window::EffectWindow;

/// Fills a raw grid by rendering every pixel inside some point's window.
pub struct PixelAccumulator<'s, S: ?Sized> {
    transform: CoordinateTransform,
    effect_distance: f64,
    effect_px: i64,
    strategy: &'s S,
}

impl<'s, S: RenderStrategy + ?Sized> PixelAccumulator<'s, S> {
    pub fn new(transform: CoordinateTransform, effect_distance: f64, strategy: &'s S) -> Self {
        Self {
            transform,
            effect_distance,
            effect_px: transform.effect_distance_px(effect_distance),
            strategy,
        }
    }

    /// Window radius in pixels.
    pub fn effect_px(&self) -> i64 {
        self.effect_px
    }

    /// Pixels the given point can influence.
    pub fn window_for(&self, point: &Point) -> EffectWindow {
        EffectWindow::around(
            self.transform.to_pixel(point.latitude, point.longitude),
            self.effect_px,
            self.transform.width(),
            self.transform.height(),
        )
    }

    /// Render on the calling thread, in point order.
    ///
    /// The first point whose window reaches an unprocessed pixel triggers its
    /// single render.
    pub fn run(&self, points: &[Point]) -> RawGrid {
        let mut grid = PixelGrid::filled(self.transform.width(), self.transform.height(), None);

        for point in points {
            for (x, y) in self.window_for(point).pixels() {
                let cell = &mut grid[(x, y)];
                if cell.is_none() {
                    *cell = Some(self.render_pixel(points, x, y));
                }
            }
        }

        grid
    }

    /// Render on the rayon pool, one row per task.
    ///
    /// Marks the union of all windows first, then renders each marked pixel
    /// once. Produces the same grid as [`PixelAccumulator::run`].
    pub fn run_parallel(&self, points: &[Point]) -> RawGrid {
        let width = self.transform.width();
        let height = self.transform.height();

        let mut touched = PixelGrid::filled(width, height, false);
        for point in points {
            for (x, y) in self.window_for(point).pixels() {
                touched[(x, y)] = true;
            }
        }

        let mut grid = PixelGrid::filled(width, height, None);
        grid.as_mut_slice()
            .par_chunks_mut(width)
            .zip(touched.as_slice().par_chunks(width))
            .enumerate()
            .for_each(|(y, (row, mask))| {
                for (x, (cell, &hit)) in row.iter_mut().zip(mask).enumerate() {
                    if hit {
                        *cell = Some(self.render_pixel(points, x, y));
                    }
                }
            });

        grid
    }

    /// Drop points that can neither trigger nor influence a render.
    ///
    /// A point is kept when its window touches the grid, or when it lies
    /// within `effect_distance` of the bounds on both axes. Anything else
    /// triggers no render and is skipped by every render it could join, so
    /// the raw grid is identical with or without this pass.
    pub fn prefilter_points<'p>(&self, points: &'p [Point]) -> Cow<'p, [Point]> {
        let reach = self.transform.bounds().expand(self.effect_distance);
        let keep = |p: &Point| {
            reach.contains_point(p.latitude, p.longitude) || !self.window_for(p).is_empty()
        };

        if points.iter().all(|p| keep(p)) {
            return Cow::Borrowed(points);
        }
        Cow::Owned(points.iter().filter(|p| keep(*p)).copied().collect())
    }

    fn render_pixel(&self, points: &[Point], x: usize, y: usize) -> f64 {
        let (lat, lng) = self.transform.to_lonlat(x, y);
        self.strategy.render(lat, lng, points, self.effect_distance)
    }
}

/// Validate inputs and produce the raw grid.
///
/// Fails with a configuration error before allocating anything when the
/// bounds or options are invalid.
pub fn accumulate<S: RenderStrategy + ?Sized>(
    points: &[Point],
    bounds: &Bounds,
    options: &RenderOptions,
    strategy: &S,
) -> HeatmapResult<RawGrid> {
    options.validate()?;
    let transform = CoordinateTransform::new(*bounds, options.width, options.height)?;
    Ok(accumulate_validated(points, transform, options, strategy))
}

pub(crate) fn accumulate_validated<S: RenderStrategy + ?Sized>(
    points: &[Point],
    transform: CoordinateTransform,
    options: &RenderOptions,
    strategy: &S,
) -> RawGrid {
    tracing::debug!(
        points = points.len(),
        width = options.width,
        height = options.height,
        effect_distance = options.effect_distance,
        strategy = ?options.strategy,
        parallel = options.parallel,
        "render_heatmap input"
    );

    let accumulator = PixelAccumulator::new(transform, options.effect_distance, strategy);
    let points = if options.prefilter_points {
        accumulator.prefilter_points(points)
    } else {
        Cow::Borrowed(points)
    };

    let grid = if options.parallel {
        accumulator.run_parallel(&points)
    } else {
        accumulator.run(&points)
    };

    tracing::debug!(
        points = points.len(),
        effect_px = accumulator.effect_px(),
        processed = grid.processed_count(),
        "Accumulated raw grid"
    );

    grid
}
