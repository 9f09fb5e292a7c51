//! Weighted sample points.

use serde::{Deserialize, Serialize};

/// A geolocated sample with a weight (incident count, sensor reading, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
    pub value: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64, value: f64) -> Self {
        Self {
            latitude,
            longitude,
            value,
        }
    }

    /// Planar distance to a location, measured directly in degrees.
    ///
    /// Ignores curvature, consistent with the equirectangular pixel transform.
    pub fn planar_distance(&self, lat: f64, lng: f64) -> f64 {
        planar_distance(self.latitude, self.longitude, lat, lng)
    }
}

/// Euclidean distance between two (lat, lng) pairs in coordinate space.
pub fn planar_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = lat1 - lat2;
    let dlng = lng1 - lng2;
    (dlat * dlat + dlng * dlng).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_distance() {
        assert_eq!(planar_distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(Point::new(1.0, 1.0, 2.0).planar_distance(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_deserialize_short_names() {
        let point: Point = serde_json::from_str(r#"{"lat": 1.5, "lng": -2.0, "value": 4}"#).unwrap();
        assert_eq!(point, Point::new(1.5, -2.0, 4.0));
    }
}
