//! Prelude module for common ridemap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use ridemap::prelude::*;`

pub use crate::core::{
    constants::{
        DEFAULT_CENTER, DEFAULT_ZOOM, GPX_OVERVIEW_ZOOM, MARKER_FIT_PADDING, SINGLE_EVENT_ZOOM,
        TRACK_FIT_PADDING,
    },
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};

pub use crate::events::{
    filter::visible_events,
    model::{Event, EventLocation, ScheduleItem, SocialLink},
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

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
