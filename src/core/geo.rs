use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator projection constants
const EARTH_RADIUS: f64 = 6378137.0;
const MAX_LATITUDE: f64 = 85.0511287798;

/// Represents a geographical coordinate with latitude and longitude.
///
/// Constructed values are always finite: use [`LatLng::try_new`] when the
/// inputs come from untrusted data, so "entity without a usable location"
/// is simply `Option<LatLng>` and no consumer has to re-check finiteness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a coordinate only when both components are finite real numbers.
    pub fn try_new(lat: f64, lng: f64) -> Option<Self> {
        if lat.is_finite() && lng.is_finite() {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the Web Mercator valid range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Projects to world pixel coordinates at the given zoom (EPSG:3857).
    pub fn to_world_pixel(&self, zoom: f64) -> Point {
        let scale = crate::core::constants::TILE_SIZE * 2_f64.powf(zoom);
        let lat = Self::clamp_lat(self.lat);

        let x = self.lng.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;

        let pixel_x = (x + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale;
        let pixel_y = (-y + PI * EARTH_RADIUS) / (2.0 * PI * EARTH_RADIUS) * scale;

        Point::new(pixel_x, pixel_y)
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom.
    pub fn from_world_pixel(pixel: Point, zoom: f64) -> Self {
        let scale = crate::core::constants::TILE_SIZE * 2_f64.powf(zoom);

        let x = (pixel.x / scale) * (2.0 * PI * EARTH_RADIUS) - PI * EARTH_RADIUS;
        let y = PI * EARTH_RADIUS - (pixel.y / scale) * (2.0 * PI * EARTH_RADIUS);

        let lng = (x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();

        Self::new(lat, lng)
    }
}

/// Represents a point in screen or projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Represents a closed bounding box of geographical coordinates.
///
/// Invariant: `south_west.lat <= north_east.lat` and
/// `south_west.lng <= north_east.lng` (no antimeridian wraparound). Bounds
/// are rebuilt wholesale from point sets rather than mutated by consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual edge coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Computes the minimal bounds enclosing all given points.
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for point in rest {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Checks if the bounds contain a point (inclusive on all edges)
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Gets the span of the bounds
    pub fn span(&self) -> LatLng {
        LatLng::new(
            self.north_east.lat - self.south_west.lat,
            self.north_east.lng - self.south_west.lng,
        )
    }

    pub fn west(&self) -> f64 {
        self.south_west.lng
    }

    pub fn south(&self) -> f64 {
        self.south_west.lat
    }

    pub fn east(&self) -> f64 {
        self.north_east.lng
    }

    pub fn north(&self) -> f64 {
        self.north_east.lat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(10.4550, -84.0100);
        assert_eq!(coord.lat, 10.4550);
        assert_eq!(coord.lng, -84.0100);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(LatLng::try_new(f64::NAN, -84.0).is_none());
        assert!(LatLng::try_new(10.0, f64::INFINITY).is_none());
        assert!(LatLng::try_new(10.0, -84.0).is_some());
    }

    #[test]
    fn test_world_pixel_round_trip() {
        let coord = LatLng::new(10.4550, -84.0100);
        let pixel = coord.to_world_pixel(12.0);
        let back = LatLng::from_world_pixel(pixel, 12.0);

        assert!((back.lat - coord.lat).abs() < 1e-9);
        assert!((back.lng - coord.lng).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::from_coords(10.40, -84.05, 10.50, -83.95);
        let inside = LatLng::new(10.45, -84.01);
        let outside = LatLng::new(10.32, -83.96);

        assert!(bounds.contains(&inside));
        assert!(!bounds.contains(&outside));
    }

    #[test]
    fn test_bounds_contains_is_inclusive() {
        let bounds = LatLngBounds::from_coords(10.0, -85.0, 11.0, -84.0);
        assert!(bounds.contains(&LatLng::new(10.0, -84.5)));
        assert!(bounds.contains(&LatLng::new(11.0, -85.0)));
        assert!(bounds.contains(&LatLng::new(10.5, -84.0)));
    }

    #[test]
    fn test_bounds_from_points() {
        assert!(LatLngBounds::from_points(&[]).is_none());

        let points = [
            LatLng::new(10.4550, -84.0100),
            LatLng::new(10.3231, -83.9645),
            LatLng::new(10.4185, -84.0890),
        ];
        let bounds = LatLngBounds::from_points(&points).unwrap();
        assert_eq!(bounds.south(), 10.3231);
        assert_eq!(bounds.west(), -84.0890);
        assert_eq!(bounds.north(), 10.4550);
        assert_eq!(bounds.east(), -83.9645);

        for point in &points {
            assert!(bounds.contains(point));
        }
    }
}
