//! GPX route tracks: parsing, the loaded track value, and the async loader.

pub mod loader;
pub mod parser;

use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// Errors raised while loading or parsing a route track.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TrackError {
    /// The track file could not be retrieved (non-OK status or transport failure)
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The retrieved text is not a GPX document with at least one track point
    #[error("invalid track data: {0}")]
    Parse(String),

    /// A route needs at least two points to form a line
    #[error("route needs at least 2 points, got {count}")]
    InsufficientPoints { count: usize },

    /// A newer load for the same loader started before this one resolved
    #[error("load superseded by a newer request")]
    Superseded,
}

/// An ordered sequence of geographic points describing a route.
///
/// Immutable once parsed; the source file's point order is preserved exactly
/// (no reordering, deduplication, or simplification). Always holds at least
/// two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    points: Vec<LatLng>,
    bounds: LatLngBounds,
}

impl Track {
    /// Builds a track from an ordered point sequence, precomputing its bounds.
    pub fn new(points: Vec<LatLng>) -> Result<Self, TrackError> {
        if points.len() < 2 {
            return Err(TrackError::InsufficientPoints {
                count: points.len(),
            });
        }
        let Some(bounds) = LatLngBounds::from_points(&points) else {
            return Err(TrackError::InsufficientPoints { count: 0 });
        };
        Ok(Self { points, bounds })
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Minimal bounding box enclosing every track point
    pub fn bounds(&self) -> &LatLngBounds {
        &self.bounds
    }

    /// Exports the track as a GeoJSON `LineString` feature, the shape the
    /// rendering collaborator draws as the route layer.
    pub fn to_geojson(&self) -> serde_json::Value {
        let coordinates: Vec<[f64; 2]> = self.points.iter().map(|p| [p.lng, p.lat]).collect();
        serde_json::json!({
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
        })
    }
}
