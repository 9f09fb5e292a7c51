//! Linear mapping between geographic coordinates and pixel coordinates.
//!
//! This is an equirectangular approximation: every pixel covers the same
//! number of degrees, so results drift from true ground distance at extreme
//! latitudes. Existing outputs depend on it; do not swap in a projection.

use heatmap_common::{Bounds, HeatmapError, HeatmapResult};

/// Maps `(lat, lng)` onto a `width x height` grid covering `bounds`.
///
/// Pixel `(0, 0)` is the `(max_lat, min_lng)` corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    bounds: Bounds,
    width: usize,
    height: usize,
}

impl CoordinateTransform {
    pub fn new(bounds: Bounds, width: usize, height: usize) -> HeatmapResult<Self> {
        bounds.validate()?;
        if width == 0 || height == 0 {
            return Err(HeatmapError::InvalidDimensions { width, height });
        }
        Ok(Self {
            bounds,
            width,
            height,
        })
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel containing `(lat, lng)`.
    ///
    /// Locations outside the bounds give pixels outside the grid, including
    /// negative ones.
    pub fn to_pixel(&self, lat: f64, lng: f64) -> (i64, i64) {
        let lng_frac = (lng - self.bounds.min_lng) / self.bounds.lng_span();
        let lat_frac = (lat - self.bounds.min_lat) / self.bounds.lat_span();

        let x = (lng_frac * self.width as f64).floor() as i64;
        let y = ((1.0 - lat_frac) * self.height as f64).floor() as i64;
        (x, y)
    }

    /// Geographic location of the top-left corner of pixel `(x, y)` as `(lat, lng)`.
    ///
    /// Logs a warning when mapping the result back lands more than one pixel
    /// away; rendering continues either way.
    pub fn to_lonlat(&self, x: usize, y: usize) -> (f64, f64) {
        let (lat, lng) = self.pixel_corner(x, y);

        let (calc_x, calc_y) = self.to_pixel(lat, lng);
        if (calc_x - x as i64).abs() > 1 || (calc_y - y as i64).abs() > 1 {
            tracing::warn!(
                x,
                y,
                calc_x,
                calc_y,
                "Pixel round trip mismatch"
            );
        }

        (lat, lng)
    }

    /// Number of pixels spanned by `effect_distance` degrees of longitude.
    ///
    /// Rounded up by one pixel so windows never clip an influenced pixel.
    /// Saturates at `i64::MAX` for distances far wider than the grid.
    pub fn effect_distance_px(&self, effect_distance: f64) -> i64 {
        self.to_pixel(0.0, effect_distance)
            .0
            .saturating_sub(self.to_pixel(0.0, 0.0).0)
            .saturating_add(1)
    }

    fn pixel_corner(&self, x: usize, y: usize) -> (f64, f64) {
        let x_frac = x as f64 / self.width as f64;
        let y_frac = y as f64 / self.height as f64;

        let lng = self.bounds.min_lng + x_frac * self.bounds.lng_span();
        let lat = self.bounds.max_lat - y_frac * self.bounds.lat_span();
        (lat, lng)
    }
}
