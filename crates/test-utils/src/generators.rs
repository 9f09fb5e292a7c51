//! Deterministic sample point generators.
//!
//! The same seed always yields the same points, so failures reproduce.

/// Creates `count` points scattered uniformly inside the given bounds.
///
/// Values fall in `[0, 10)`.
///
/// # Arguments
///
/// * `bounds` - `(min_lat, min_lng, max_lat, max_lng)`
/// * `count` - Number of points
/// * `seed` - Seed value for deterministic generation
///
/// # Returns
///
/// `(lat, lng, value)` tuples.
///
/// # Example
///
/// ```
/// use test_utils::create_scattered_points;
///
/// let points = create_scattered_points((0.0, 0.0, 1.0, 1.0), 20, 7);
/// assert_eq!(points.len(), 20);
/// assert_eq!(points, create_scattered_points((0.0, 0.0, 1.0, 1.0), 20, 7));
/// ```
pub fn create_scattered_points(
    bounds: (f64, f64, f64, f64),
    count: usize,
    seed: u32,
) -> Vec<(f64, f64, f64)> {
    let (min_lat, min_lng, max_lat, max_lng) = bounds;
    (0..count as u32)
        .map(|i| {
            let lat = min_lat + unit_float(simple_hash(i, 0, seed)) * (max_lat - min_lat);
            let lng = min_lng + unit_float(simple_hash(i, 1, seed)) * (max_lng - min_lng);
            let value = unit_float(simple_hash(i, 2, seed)) * 10.0;
            (lat, lng, value)
        })
        .collect()
}

/// Creates a regular `cols x rows` lattice of points with a constant value.
///
/// Lattice nodes sit at cell centres so none lands exactly on an edge.
pub fn create_lattice_points(
    bounds: (f64, f64, f64, f64),
    cols: usize,
    rows: usize,
    value: f64,
) -> Vec<(f64, f64, f64)> {
    let (min_lat, min_lng, max_lat, max_lng) = bounds;
    let dlat = (max_lat - min_lat) / rows.max(1) as f64;
    let dlng = (max_lng - min_lng) / cols.max(1) as f64;
    let mut points = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            points.push((
                min_lat + (row as f64 + 0.5) * dlat,
                min_lng + (col as f64 + 0.5) * dlng,
                value,
            ));
        }
    }
    points
}

/// Returns a permutation of `items` that depends only on `seed`.
pub fn shuffled<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut out = items.to_vec();
    // Fisher-Yates driven by the hash
    for i in (1..out.len()).rev() {
        let j = simple_hash(i as u32, 3, seed) as usize % (i + 1);
        out.swap(i, j);
    }
    out
}

fn unit_float(hash: u32) -> f64 {
    hash as f64 / (u32::MAX as f64 + 1.0)
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scattered_points_inside_bounds() {
        let bounds = (10.0, -20.0, 12.0, -18.0);
        for (lat, lng, value) in create_scattered_points(bounds, 100, 42) {
            assert!((10.0..12.0).contains(&lat));
            assert!((-20.0..-18.0).contains(&lng));
            assert!((0.0..10.0).contains(&value));
        }
    }

    #[test]
    fn test_lattice_size() {
        let points = create_lattice_points((0.0, 0.0, 1.0, 1.0), 4, 3, 1.0);
        assert_eq!(points.len(), 12);
        assert_eq!(points[0], (1.0 / 6.0, 0.125, 1.0));
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let items: Vec<u32> = (0..50).collect();
        let mut shuffled_items = shuffled(&items, 9);
        assert_ne!(shuffled_items, items);
        shuffled_items.sort();
        assert_eq!(shuffled_items, items);
    }
}
