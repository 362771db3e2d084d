//! Declarative view intents for the rendering collaborator.
//!
//! The core never draws pixels; it emits what to show (center/zoom, markers,
//! route polyline, popup anchor) and how to frame the initial view.

use crate::core::constants::{
    DEFAULT_CENTER, DEFAULT_ZOOM, MARKER_FIT_PADDING, SINGLE_EVENT_ZOOM, TRACK_FIT_PADDING,
};
use crate::core::geo::{LatLng, LatLngBounds};
use crate::events::model::Event;
use crate::track::Track;
use serde::{Deserialize, Serialize};

/// A marker to draw for a located event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerIntent {
    pub event_id: String,
    pub position: LatLng,
}

/// Popup anchored at the selected marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupIntent {
    pub event_id: String,
    pub anchor: LatLng,
}

/// How the viewport should frame its initial view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Fit the given bounds with pixel padding, optionally capping zoom
    FitBounds {
        bounds: LatLngBounds,
        padding: f64,
        max_zoom: Option<f64>,
    },
    /// Center directly on a point at a fixed zoom
    CenterOn { center: LatLng, zoom: f64 },
    /// Regional fallback view
    Default,
}

/// Chooses the initial framing for the route-vs-markers cases:
/// a present track wins (route overview, markers suppressed), then a focused
/// single event, then the set of located events, then the regional default.
pub fn initial_view(
    track: Option<&Track>,
    focused: Option<&Event>,
    events: &[Event],
) -> ViewCommand {
    if let Some(track) = track {
        return ViewCommand::FitBounds {
            bounds: track.bounds().clone(),
            padding: TRACK_FIT_PADDING,
            max_zoom: None,
        };
    }

    if let Some(coord) = focused.and_then(Event::coord) {
        return ViewCommand::CenterOn {
            center: coord,
            zoom: SINGLE_EVENT_ZOOM,
        };
    }

    let located: Vec<LatLng> = events.iter().filter_map(Event::coord).collect();
    match located.as_slice() {
        [] => ViewCommand::Default,
        [only] => ViewCommand::CenterOn {
            center: *only,
            zoom: DEFAULT_ZOOM,
        },
        many => match LatLngBounds::from_points(many) {
            // Cap below the single-event zoom so tightly clustered markers
            // do not over-zoom the overview.
            Some(bounds) => ViewCommand::FitBounds {
                bounds,
                padding: MARKER_FIT_PADDING,
                max_zoom: Some(SINGLE_EVENT_ZOOM - 1.0),
            },
            None => ViewCommand::Default,
        },
    }
}

impl ViewCommand {
    /// Center/zoom pair for the regional fallback
    pub fn default_view() -> (LatLng, f64) {
        (DEFAULT_CENTER, DEFAULT_ZOOM)
    }
}

/// Everything the rendering collaborator needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapScene {
    pub center: LatLng,
    pub zoom: f64,
    /// Markers to draw; empty whenever a route track is shown
    pub markers: Vec<MarkerIntent>,
    /// Route polyline as a GeoJSON LineString feature
    pub route: Option<serde_json::Value>,
    pub popup: Option<PopupIntent>,
}
