//! Region and zoom constants for the event map.
//! Keeping them in a single place makes it easier to tweak map-wide magic numbers.

use crate::core::geo::LatLng;

/// Default square tile size in pixels (Web Mercator convention).
pub const TILE_SIZE: f64 = 256.0;

/// Fallback view center for the region (Puerto Viejo de Sarapiquí).
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 10.4550,
    lng: -84.0100,
};

/// Fallback zoom for the regional overview.
pub const DEFAULT_ZOOM: f64 = 9.0;

/// Zoom used when the view focuses a single event.
pub const SINGLE_EVENT_ZOOM: f64 = 13.0;

/// Starting zoom while a GPX route is still loading.
pub const GPX_OVERVIEW_ZOOM: f64 = 10.0;

/// Pixel padding when fitting the view to a whole route.
pub const TRACK_FIT_PADDING: f64 = 50.0;

/// Pixel padding when fitting the view to a set of event markers.
pub const MARKER_FIT_PADDING: f64 = 60.0;

/// Zoom limits matching the raster tile source.
pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 19.0;
