//! Read-only entity source for events.
//!
//! The map core only consumes the two read operations and does not care about
//! the backing implementation or its latency. The mock source mirrors a slow
//! backend by sleeping before answering.

use crate::events::model::{Event, EventLocation, ScheduleItem, SocialLink};
use async_trait::async_trait;
use std::time::Duration;

/// Read operations the map core consumes
#[async_trait]
pub trait EventSource: Send + Sync {
    /// All events, sorted by date ascending
    async fn list_events(&self) -> Vec<Event>;

    /// A single event by id, if present
    async fn event_by_id(&self, id: &str) -> Option<Event>;
}

/// In-memory event source with artificial latency
#[derive(Debug, Clone)]
pub struct MockEventSource {
    events: Vec<Event>,
    list_latency: Duration,
    get_latency: Duration,
}

impl MockEventSource {
    pub fn new() -> Self {
        Self {
            events: fixture_events(),
            list_latency: Duration::from_millis(500),
            get_latency: Duration::from_millis(300),
        }
    }

    /// Source over a custom event list
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            ..Self::new()
        }
    }

    /// Zero-latency variant for tests
    pub fn instant(events: Vec<Event>) -> Self {
        Self {
            events,
            list_latency: Duration::ZERO,
            get_latency: Duration::ZERO,
        }
    }
}

impl Default for MockEventSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventSource for MockEventSource {
    async fn list_events(&self) -> Vec<Event> {
        tokio::time::sleep(self.list_latency).await;
        let mut events = self.events.clone();
        // ISO-8601 dates sort correctly as strings.
        events.sort_by(|a, b| a.date.cmp(&b.date));
        events
    }

    async fn event_by_id(&self, id: &str) -> Option<Event> {
        tokio::time::sleep(self.get_latency).await;
        self.events.iter().find(|event| event.id == id).cloned()
    }
}

/// The seeded regional event list
fn fixture_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            name: "Vuelta al Sarapiquí Clásica".to_string(),
            date: "2024-08-15T08:00:00Z".to_string(),
            short_description: "Experience the classic Sarapiquí route with stunning jungle views."
                .to_string(),
            full_description: "A challenging yet rewarding ride through the heart of the \
                               rainforest, with hydration points and mechanical support."
                .to_string(),
            location: EventLocation::located(
                "Central Park, Puerto Viejo de Sarapiquí",
                10.4550,
                -84.0100,
            ),
            gpx_route_url: Some("/gpx/vuelta-sarapiqui.gpx".to_string()),
            organizer_name: "Club Ciclismo Sarapiquí".to_string(),
            organizer_social: vec![SocialLink {
                platform: "Facebook".to_string(),
                url: "https://facebook.com/ccsarapiqui".to_string(),
            }],
            schedule: vec![
                ScheduleItem {
                    time: "07:00 AM".to_string(),
                    activity: "Registration & Kit Pickup".to_string(),
                },
                ScheduleItem {
                    time: "08:00 AM".to_string(),
                    activity: "Race Start".to_string(),
                },
            ],
            image_url: "https://placehold.co/600x400.png".to_string(),
            category: Some("Road Cycling".to_string()),
        },
        Event {
            id: "2".to_string(),
            name: "Ruta del Chocolate MTB Challenge".to_string(),
            date: "2024-09-05T09:00:00Z".to_string(),
            short_description: "A sweet and muddy MTB adventure through cocoa plantations."
                .to_string(),
            full_description: "An off-road journey through local cocoa plantations with trails, \
                               river crossings, and chocolate at the finish line."
                .to_string(),
            location: EventLocation::located(
                "La Virgen de Sarapiquí Community Center",
                10.4185,
                -84.0890,
            ),
            gpx_route_url: Some("/gpx/ruta-chocolate-mtb.gpx".to_string()),
            organizer_name: "Sarapiquí Aventuras MTB".to_string(),
            organizer_social: vec![SocialLink {
                platform: "Website".to_string(),
                url: "https://sarapiquiaventuras.com".to_string(),
            }],
            schedule: vec![ScheduleItem {
                time: "09:00 AM".to_string(),
                activity: "MTB Challenge Start".to_string(),
            }],
            image_url: "https://placehold.co/600x400.png".to_string(),
            category: Some("MTB".to_string()),
        },
        Event {
            id: "3".to_string(),
            name: "Paseo Familiar Sarapiquí Verde".to_string(),
            date: "2024-09-22T10:00:00Z".to_string(),
            short_description: "A fun and easy ride for the whole family along the Sarapiquí river."
                .to_string(),
            full_description: "A leisurely ride along the river for all ages and skill levels, \
                               with plenty of stops for photos and refreshments."
                .to_string(),
            location: EventLocation::located("Sarapiquí Riverbanks Park, Horquetas", 10.3231, -83.9645),
            gpx_route_url: None,
            organizer_name: "Municipalidad de Sarapiquí".to_string(),
            organizer_social: vec![SocialLink {
                platform: "Facebook".to_string(),
                url: "https://facebook.com/munisarapiqui".to_string(),
            }],
            schedule: vec![ScheduleItem {
                time: "10:00 AM".to_string(),
                activity: "Ride Starts".to_string(),
            }],
            image_url: "https://placehold.co/600x400.png".to_string(),
            category: Some("Family Ride".to_string()),
        },
        Event {
            id: "4".to_string(),
            name: "Amanecer en la Montaña Gravel Ride".to_string(),
            date: "2024-10-12T06:00:00Z".to_string(),
            short_description: "Early morning gravel ride to watch the sunrise over the mountains."
                .to_string(),
            full_description: "Start before dawn and ride up to scenic viewpoints for the sunrise. \
                               Mixed paved and gravel terrain; lights and good fitness required."
                .to_string(),
            location: EventLocation::located("Mirador San Ramón, Sarapiquí", 10.3500, -84.1000),
            gpx_route_url: Some("/gpx/amanecer-gravel.gpx".to_string()),
            organizer_name: "Graveleros CR".to_string(),
            organizer_social: vec![SocialLink {
                platform: "Strava".to_string(),
                url: "https://strava.com/clubs/graveleroscr".to_string(),
            }],
            schedule: vec![ScheduleItem {
                time: "06:00 AM".to_string(),
                activity: "Ride Departs".to_string(),
            }],
            image_url: "https://placehold.co/600x400.png".to_string(),
            category: Some("Gravel".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_events_sorted_by_date() {
        let source = MockEventSource::instant(fixture_events());
        let events = source.list_events().await;

        let dates: Vec<&str> = events.iter().map(|e| e.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(events.len(), 4);
    }

    #[tokio::test]
    async fn test_event_by_id() {
        let source = MockEventSource::instant(fixture_events());

        let event = source.event_by_id("2").await.unwrap();
        assert_eq!(event.name, "Ruta del Chocolate MTB Challenge");
        assert!(source.event_by_id("99").await.is_none());
    }
}
