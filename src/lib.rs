//! # ridemap
//!
//! Map core for a cycling-event listing app: an owned viewport with
//! declarative fit/fly operations, an async GPX track loader with
//! latest-request-wins semantics, a single-selection marker state machine,
//! and a viewport-driven visible-event filter.
//!
//! Rendering is out of scope: the crate emits declarative intents
//! (center/zoom, markers, route polyline, popup anchor) for a map-rendering
//! collaborator to draw.

pub mod core;
pub mod events;
pub mod map;
pub mod track;

pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};

pub use crate::events::{
    filter::visible_events,
    model::{Event, EventLocation},
    source::{EventSource, MockEventSource},
};

pub use crate::map::{
    scene::{MapScene, MarkerIntent, PopupIntent, ViewCommand},
    selection::{FocusRequest, Selection},
    view::EventMap,
};

pub use crate::track::{
    loader::{HttpFetcher, RouteState, TrackFetcher, TrackLoader},
    parser::parse_track,
    Track, TrackError,
};

/// Result type used throughout the library
pub type Result<T, E = MapError> = std::result::Result<T, E>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Track(#[from] TrackError),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("event {0} has no usable coordinates")]
    UnlocatedEntity(String),

    #[error("unknown event: {0}")]
    UnknownEvent(String),
}

/// Error type alias for convenience
pub type Error = MapError;
