//! The orchestrating event map: owns the viewport, selection, optional route
//! track, and the event collection, and wires them together.

use crate::core::constants::{DEFAULT_CENTER, DEFAULT_ZOOM};
use crate::core::geo::{LatLngBounds, Point};
use crate::events::filter::visible_events;
use crate::events::model::Event;
use crate::map::scene::{initial_view, MapScene, MarkerIntent, PopupIntent, ViewCommand};
use crate::map::selection::Selection;
use crate::prelude::HashMap;
use crate::track::Track;
use crate::{MapError, Result, Viewport};
use crossbeam_channel::Receiver;

/// One interactive event map instance.
///
/// All view state lives in the owned [`Viewport`]; collaborators observe it
/// through [`EventMap::current_bounds`] and the bounds channel rather than
/// writing center/zoom directly.
pub struct EventMap {
    viewport: Viewport,
    selection: Selection,
    track: Option<Track>,
    events: Vec<Event>,
    index: HashMap<String, usize>,
    /// Single-entity focus for the event-detail view
    focused: Option<String>,
    interactive: bool,
    /// Whether the viewport has settled at least once; before that the
    /// visible set is fail-open
    has_settled: bool,
}

impl EventMap {
    pub fn new(size: Point) -> Self {
        Self {
            viewport: Viewport::new(DEFAULT_CENTER, DEFAULT_ZOOM, size),
            selection: Selection::Idle,
            track: None,
            events: Vec::new(),
            index: HashMap::default(),
            focused: None,
            interactive: true,
            has_settled: false,
        }
    }

    /// Non-interactive maps ignore marker clicks and show no popup
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Registers a bounds-change listener on the owned viewport
    pub fn subscribe_bounds(&mut self) -> Receiver<LatLngBounds> {
        self.viewport.subscribe()
    }

    /// Replaces the event collection, dropping any selection that no longer
    /// resolves to a listed event.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.index = events
            .iter()
            .enumerate()
            .map(|(i, event)| (event.id.clone(), i))
            .collect();
        self.events = events;

        if let Some(id) = self.selection.selected_id() {
            if !self.index.contains_key(id) {
                self.selection.close();
            }
        }
        if let Some(id) = &self.focused {
            if !self.index.contains_key(id) {
                self.focused = None;
            }
        }
    }

    /// Shows a route track. Markers are never drawn alongside a track, so
    /// any selection is dropped.
    pub fn set_track(&mut self, track: Track) {
        self.selection.close();
        self.track = Some(track);
    }

    /// Discards the current track (for example when the source URL changes)
    pub fn clear_track(&mut self) {
        self.track = None;
    }

    /// Focuses a single event for the detail view.
    ///
    /// This is the explicit validation path for unlocated entities: focusing
    /// an event without coordinates is an error rather than a silent skip.
    pub fn focus_event(&mut self, id: &str) -> Result<()> {
        let event = self
            .event_by_id(id)
            .ok_or_else(|| MapError::UnknownEvent(id.to_string()))?;
        event.located_coord()?;
        self.focused = Some(id.to_string());
        Ok(())
    }

    pub fn event_by_id(&self, id: &str) -> Option<&Event> {
        self.index.get(id).map(|&i| &self.events[i])
    }

    /// Applies the route-vs-markers view policy and settles, emitting the
    /// initial bounds to listeners.
    pub fn apply_initial_view(&mut self) {
        let focused = self.focused.as_deref().and_then(|id| self.event_by_id(id));
        let command = initial_view(self.track.as_ref(), focused, &self.events);
        match command {
            ViewCommand::FitBounds {
                bounds,
                padding,
                max_zoom,
            } => {
                self.viewport.fit_bounds(&bounds, padding, max_zoom);
            }
            ViewCommand::CenterOn { center, zoom } => {
                self.viewport.center_on(center, zoom);
            }
            ViewCommand::Default => {
                let (center, zoom) = ViewCommand::default_view();
                self.viewport.center_on(center, zoom);
            }
        }
        self.settle();
    }

    /// Handles a click on the marker for `id`.
    ///
    /// Selecting flies the viewport toward the anchor at a zoom no lower
    /// than one below the single-event zoom, never zooming out past that
    /// floor when already deeper.
    pub fn click_marker(&mut self, id: &str) {
        if !self.interactive || self.track.is_some() {
            return;
        }
        let Some(event) = self.event_by_id(id).cloned() else {
            log::debug!("ignoring click on unknown marker {id}");
            return;
        };

        if let Some(focus) = self.selection.click(&event) {
            let zoom = self.viewport.zoom().max(focus.min_zoom);
            self.viewport.center_on(focus.center, zoom);
            self.settle();
        }
    }

    /// Closes the popup, returning the selection to idle
    pub fn close_popup(&mut self) {
        self.selection.close();
    }

    /// User pan gesture, in pixels
    pub fn pan_by(&mut self, delta: Point) {
        self.viewport.pan(delta);
        self.settle();
    }

    /// User zoom gesture
    pub fn zoom_to(&mut self, zoom: f64) {
        self.viewport.zoom_to(zoom);
        self.settle();
    }

    pub fn current_bounds(&self) -> LatLngBounds {
        self.viewport.bounds()
    }

    /// Events inside the current viewport, in collection order.
    /// Fail-open before the first settle: the full set counts as visible.
    pub fn visible_events(&self) -> Vec<&Event> {
        let bounds = self.has_settled.then(|| self.viewport.bounds());
        visible_events(&self.events, bounds.as_ref())
    }

    /// Declarative render intents for the current frame
    pub fn scene(&self) -> MapScene {
        let markers = if self.track.is_some() {
            Vec::new()
        } else {
            self.events
                .iter()
                .filter_map(|event| {
                    event.coord().map(|position| MarkerIntent {
                        event_id: event.id.clone(),
                        position,
                    })
                })
                .collect()
        };

        let popup = if self.interactive && self.track.is_none() {
            match (self.selection.selected_id(), self.selection.anchor()) {
                (Some(event_id), Some(anchor)) => Some(PopupIntent {
                    event_id: event_id.to_string(),
                    anchor,
                }),
                _ => None,
            }
        } else {
            None
        };

        MapScene {
            center: self.viewport.center(),
            zoom: self.viewport.zoom(),
            markers,
            route: self.track.as_ref().map(Track::to_geojson),
            popup,
        }
    }

    fn settle(&mut self) {
        self.viewport.settle();
        self.has_settled = true;
    }
}
