//! Row-major pixel grid shared by the raw and scaled stages.

use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

use heatmap_common::UNPROCESSED;

/// A `height x width` grid stored row by row.
///
/// Row 0 is the northern (max latitude) edge and column 0 the western
/// (min longitude) edge. Indexing takes `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// Grid produced by accumulation; `None` marks a pixel no window reached.
pub type RawGrid = PixelGrid<Option<f64>>;

/// Grid produced by scaling; every cell is a level in `MIN_LEVEL..=MAX_LEVEL`.
pub type LevelGrid = PixelGrid<u8>;

impl<T: Clone> PixelGrid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Copy the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T> PixelGrid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    /// Iterate rows from north to south.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.width.max(1))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Build a new grid of the same shape by applying `f` to every cell.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> PixelGrid<U> {
        PixelGrid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl PixelGrid<Option<f64>> {
    /// Raw value with the unprocessed sentinel substituted for untouched cells.
    pub fn value_or_sentinel(&self, x: usize, y: usize) -> Option<f64> {
        self.get(x, y).map(|cell| cell.unwrap_or(UNPROCESSED))
    }

    /// Largest rendered value, ignoring untouched and NaN cells.
    pub fn max_value(&self) -> Option<f64> {
        self.data
            .iter()
            .flatten()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }

    /// Number of cells that have been rendered.
    pub fn processed_count(&self) -> usize {
        self.data.iter().filter(|cell| cell.is_some()).count()
    }
}

impl<T> Index<(usize, usize)> for PixelGrid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of range");
        &self.data[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for PixelGrid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of range");
        &mut self.data[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut grid = PixelGrid::filled(3, 2, 0u8);
        grid[(2, 0)] = 7;
        grid[(0, 1)] = 9;
        assert_eq!(grid.as_slice(), &[0, 0, 7, 9, 0, 0]);
        assert_eq!(grid.to_rows(), vec![vec![0, 0, 7], vec![9, 0, 0]]);
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn test_raw_grid_helpers() {
        let mut grid: RawGrid = PixelGrid::filled(2, 2, None);
        assert_eq!(grid.max_value(), None);
        assert_eq!(grid.value_or_sentinel(1, 1), Some(UNPROCESSED));

        grid[(0, 0)] = Some(-4.0);
        grid[(1, 0)] = Some(2.5);
        grid[(0, 1)] = Some(f64::NAN);
        assert_eq!(grid.max_value(), Some(2.5));
        assert_eq!(grid.processed_count(), 3);
    }
}
