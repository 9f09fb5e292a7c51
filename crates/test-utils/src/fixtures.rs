//! Common test fixtures for heatmap tests.

/// Bounds as `(min_lat, min_lng, max_lat, max_lng)`.
pub mod bounds {
    /// Square 10x10 degree box anchored at the origin; convenient for exact pixel math.
    pub const UNIT_TEN: (f64, f64, f64, f64) = (0.0, 0.0, 10.0, 10.0);

    /// Continental United States
    pub const CONUS: (f64, f64, f64, f64) = (20.0, -130.0, 55.0, -60.0);

    /// A city-sized extent (roughly central London)
    pub const CITY: (f64, f64, f64, f64) = (51.45, -0.2, 51.55, 0.0);

    /// One degree tall and a hundred wide. On a square grid the pixels are
    /// a hundred times wider than they are tall.
    pub const WIDE_STRIP: (f64, f64, f64, f64) = (0.0, 0.0, 1.0, 100.0);

    /// Whole globe
    pub const GLOBAL: (f64, f64, f64, f64) = (-90.0, -180.0, 90.0, 180.0);

    /// Degenerate box with zero extent
    pub const EMPTY: (f64, f64, f64, f64) = (5.0, 5.0, 5.0, 5.0);

    /// Inverted box (min > max)
    pub const INVERTED: (f64, f64, f64, f64) = (10.0, 10.0, 5.0, 5.0);
}

/// Small hand-built point sets as `(lat, lng, value)`.
pub mod points {
    /// Single heavy point at the centre of [`super::bounds::UNIT_TEN`].
    pub const CENTER_SPIKE: [(f64, f64, f64); 1] = [(5.0, 5.0, 9.0)];

    /// Two clusters in opposite corners of [`super::bounds::UNIT_TEN`].
    pub const TWO_CLUSTERS: [(f64, f64, f64); 6] = [
        (2.0, 2.0, 1.0),
        (2.5, 2.0, 2.0),
        (2.0, 2.5, 1.5),
        (8.0, 8.0, 3.0),
        (7.5, 8.0, 1.0),
        (8.0, 7.5, 2.0),
    ];

    /// One point just inside the east edge of [`super::bounds::WIDE_STRIP`]
    /// and one just beyond the effect distance `0.9` of that edge.
    pub const STRIP_EAST_EDGE: [(f64, f64, f64); 2] = [(0.5, 99.5, 10.0), (0.3, 100.95, 10.0)];

    /// Points well outside [`super::bounds::UNIT_TEN`].
    pub const FAR_AWAY: [(f64, f64, f64); 2] = [(-40.0, -40.0, 5.0), (60.0, 70.0, 5.0)];
}
