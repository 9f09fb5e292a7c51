//! Sentinel values and output levels used across the rendering pipeline.

/// Raw value of a pixel that no point window has reached yet.
pub const UNPROCESSED: f64 = -1.0;

/// Raw value of a pixel that was visited but received no influence.
pub const TRANSPARENT: f64 = 0.0;

/// Lowest level of a scaled grid. Unprocessed and transparent pixels end here.
pub const MIN_LEVEL: u8 = 0;

/// Highest level of a scaled grid.
pub const MAX_LEVEL: u8 = 3;
