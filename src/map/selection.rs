//! Single-marker selection state machine.

use crate::core::constants::SINGLE_EVENT_ZOOM;
use crate::core::geo::LatLng;
use crate::events::model::Event;

/// Focus the viewport should apply when a marker is selected: fly to the
/// anchor at a zoom no lower than `min_zoom`, preserving any deeper zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusRequest {
    pub center: LatLng,
    pub min_zoom: f64,
}

/// At most one marker is selected at a time; selecting a new marker replaces
/// the previous selection directly, with no transient idle state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected { event_id: String, anchor: LatLng },
}

impl Selection {
    /// Handles a marker click.
    ///
    /// Unlocated events cannot be selected; clicking one leaves the current
    /// state untouched and returns no focus request.
    pub fn click(&mut self, event: &Event) -> Option<FocusRequest> {
        let anchor = event.coord()?;
        *self = Selection::Selected {
            event_id: event.id.clone(),
            anchor,
        };
        Some(FocusRequest {
            center: anchor,
            min_zoom: SINGLE_EVENT_ZOOM - 1.0,
        })
    }

    /// Explicit close action (popup dismissed)
    pub fn close(&mut self) {
        *self = Selection::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Selection::Selected { event_id, .. } => Some(event_id),
            Selection::Idle => None,
        }
    }

    /// Popup anchor coordinate of the current selection
    pub fn anchor(&self) -> Option<LatLng> {
        match self {
            Selection::Selected { anchor, .. } => Some(*anchor),
            Selection::Idle => None,
        }
    }
}
