//! Geographic bounding rectangle mapped onto the output grid.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// A latitude/longitude rectangle in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from corner coordinates. Call [`Bounds::validate`] before rendering.
    pub fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    /// Create bounds from `[min_lat, min_lng, max_lat, max_lng]`.
    pub fn from_array(corners: [f64; 4]) -> Self {
        let [min_lat, min_lng, max_lat, max_lng] = corners;
        Self::new(min_lat, min_lng, max_lat, max_lng)
    }

    /// Latitude extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude extent in degrees.
    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Geographic centre as (lat, lng).
    pub fn center(&self) -> (f64, f64) {
        (
            self.min_lat + self.lat_span() / 2.0,
            self.min_lng + self.lng_span() / 2.0,
        )
    }

    /// Reject empty, inverted or non-finite rectangles.
    pub fn validate(&self) -> HeatmapResult<()> {
        let corners = [self.min_lat, self.min_lng, self.max_lat, self.max_lng];
        if corners.iter().any(|c| !c.is_finite()) {
            return Err(HeatmapError::InvalidBounds(format!(
                "non-finite corner in {:?}",
                corners
            )));
        }
        if self.max_lat <= self.min_lat {
            return Err(HeatmapError::InvalidBounds(format!(
                "max_lat ({}) must be greater than min_lat ({})",
                self.max_lat, self.min_lat
            )));
        }
        if self.max_lng <= self.min_lng {
            return Err(HeatmapError::InvalidBounds(format!(
                "max_lng ({}) must be greater than min_lng ({})",
                self.max_lng, self.min_lng
            )));
        }
        Ok(())
    }

    /// Grow the rectangle by `margin` degrees on every side.
    pub fn expand(&self, margin: f64) -> Bounds {
        Bounds {
            min_lat: self.min_lat - margin,
            min_lng: self.min_lng - margin,
            max_lat: self.max_lat + margin,
            max_lng: self.max_lng + margin,
        }
    }

    /// Check if a location is inside the rectangle (edges inclusive).
    pub fn contains_point(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// Parses `"min_lat,min_lng,max_lat,max_lng"`.
impl FromStr for Bounds {
    type Err = BoundsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(BoundsParseError::InvalidFormat(s.to_string()));
        }

        let mut corners = [0.0; 4];
        for (corner, part) in corners.iter_mut().zip(&parts) {
            *corner = part
                .parse()
                .map_err(|_| BoundsParseError::InvalidNumber(part.to_string()))?;
        }
        Ok(Self::from_array(corners))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BoundsParseError {
    #[error("Invalid bounds format: {0}. Expected 'min_lat,min_lng,max_lat,max_lng'")]
    InvalidFormat(String),

    #[error("Invalid number in bounds: {0}")]
    InvalidNumber(String),
}

impl From<BoundsParseError> for HeatmapError {
    fn from(err: BoundsParseError) -> Self {
        HeatmapError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounds() {
        let bounds: Bounds = "24.0,-125.0,50.0,-66.0".parse().unwrap();
        assert_eq!(bounds.min_lat, 24.0);
        assert_eq!(bounds.min_lng, -125.0);
        assert_eq!(bounds.max_lat, 50.0);
        assert_eq!(bounds.max_lng, -66.0);
    }

    #[test]
    fn test_expand_then_contains() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(!bounds.contains_point(10.5, 5.0));
        assert!(bounds.expand(1.0).contains_point(10.5, 5.0));
        assert!(!bounds.expand(1.0).contains_point(11.5, 5.0));
    }
}
