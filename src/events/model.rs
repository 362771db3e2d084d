//! Domain model for listed cycling events.

use crate::core::geo::LatLng;
use crate::MapError;
use serde::{Deserialize, Serialize};

/// Link to an organizer's social platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// One entry of an event's day schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub time: String,
    pub activity: String,
}

/// Where an event takes place.
///
/// The coordinate is optional: an event with only an address is "unlocated"
/// and is never drawn on the map nor counted as visible. Any present
/// coordinate is finite by construction of [`LatLng`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLocation {
    pub address: String,
    pub coord: Option<LatLng>,
}

impl EventLocation {
    pub fn located(address: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            address: address.into(),
            coord: LatLng::try_new(lat, lng),
        }
    }

    pub fn unlocated(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            coord: None,
        }
    }
}

/// A listed cycling event, optionally placed on the map and optionally
/// carrying a GPX route URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    /// ISO-8601 date string; list ordering sorts on it
    pub date: String,
    pub short_description: String,
    pub full_description: String,
    pub location: EventLocation,
    pub gpx_route_url: Option<String>,
    pub organizer_name: String,
    pub organizer_social: Vec<SocialLink>,
    pub schedule: Vec<ScheduleItem>,
    pub image_url: String,
    pub category: Option<String>,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date: impl Into<String>,
        location: EventLocation,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            short_description: String::new(),
            full_description: String::new(),
            location,
            gpx_route_url: None,
            organizer_name: String::new(),
            organizer_social: Vec::new(),
            schedule: Vec::new(),
            image_url: String::new(),
            category: None,
        }
    }

    pub fn with_gpx_route(mut self, url: impl Into<String>) -> Self {
        self.gpx_route_url = Some(url.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Map coordinate, if the event is located
    pub fn coord(&self) -> Option<LatLng> {
        self.location.coord
    }

    pub fn is_located(&self) -> bool {
        self.location.coord.is_some()
    }

    /// Explicit validation path for operations that require a coordinate.
    /// Spatial operations elsewhere silently exclude unlocated events instead.
    pub fn located_coord(&self) -> Result<LatLng, MapError> {
        self.location
            .coord
            .ok_or_else(|| MapError::UnlocatedEntity(self.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_coordinates_become_unlocated() {
        let location = EventLocation::located("somewhere", f64::NAN, -84.0);
        assert!(location.coord.is_none());
    }

    #[test]
    fn test_located_coord_errors_for_unlocated() {
        let event = Event::new("9", "Sin mapa", "2024-10-01T08:00:00Z", EventLocation::unlocated("?"));
        assert!(event.coord().is_none());
        assert!(matches!(
            event.located_coord(),
            Err(MapError::UnlocatedEntity(id)) if id == "9"
        ));
    }
}
