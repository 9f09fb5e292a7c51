//! Linear scaling of a raw grid into discrete output levels.

use heatmap_common::{MAX_LEVEL, MIN_LEVEL};

use crate::grid::{LevelGrid, PixelGrid, RawGrid};

/// Map raw values from `[0, max]` onto `MIN_LEVEL..=MAX_LEVEL`.
///
/// `max` is the largest rendered value. Untouched pixels and anything that
/// rounds below `MIN_LEVEL` end up at `MIN_LEVEL`. When nothing received
/// positive influence the whole grid is `MIN_LEVEL`.
pub fn scale(raw: &RawGrid) -> LevelGrid {
    let max = match raw.max_value() {
        Some(max) if max > 0.0 => max,
        max => {
            tracing::debug!(max = ?max, "No positive influence, returning transparent grid");
            return PixelGrid::filled(raw.width(), raw.height(), MIN_LEVEL);
        }
    };

    raw.map(|cell| match cell {
        Some(value) => scale_value(*value, max),
        None => MIN_LEVEL,
    })
}

/// Level for a single raw value given a positive grid maximum.
pub fn scale_value(value: f64, max: f64) -> u8 {
    let level = (f64::from(MAX_LEVEL) * value / max).round();
    if level.is_nan() {
        return MIN_LEVEL;
    }
    level.clamp(f64::from(MIN_LEVEL), f64::from(MAX_LEVEL)) as u8
}
