//! Viewport-driven visible-set filtering.

use crate::core::geo::LatLngBounds;
use crate::events::model::Event;

/// Computes the subset of `events` visible within `bounds`.
///
/// A located event is included iff its coordinate lies within the closed
/// bounding box; unlocated events are always excluded. When bounds are not
/// yet known (`None`, before the first viewport settle), the full set is
/// treated as visible rather than flashing an empty list. Output preserves
/// input order.
pub fn visible_events<'a>(events: &'a [Event], bounds: Option<&LatLngBounds>) -> Vec<&'a Event> {
    match bounds {
        Some(bounds) => events
            .iter()
            .filter(|event| match event.coord() {
                Some(coord) => bounds.contains(&coord),
                None => false,
            })
            .collect(),
        None => events.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::model::EventLocation;

    fn event(id: &str, coord: Option<(f64, f64)>) -> Event {
        let location = match coord {
            Some((lat, lng)) => EventLocation::located("addr", lat, lng),
            None => EventLocation::unlocated("addr"),
        };
        Event::new(id, id, "2024-08-15T08:00:00Z", location)
    }

    #[test]
    fn test_filter_keeps_located_events_inside_bounds() {
        let events = vec![
            event("1", Some((10.45, -84.01))),
            event("2", None),
            event("3", Some((10.32, -83.96))),
        ];
        let bounds = LatLngBounds::from_coords(10.40, -84.05, 10.50, -83.95);

        let visible = visible_events(&events, Some(&bounds));
        let ids: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn test_filter_boundary_points_are_visible() {
        let events = vec![event("edge", Some((10.40, -83.95)))];
        let bounds = LatLngBounds::from_coords(10.40, -84.05, 10.50, -83.95);

        assert_eq!(visible_events(&events, Some(&bounds)).len(), 1);
    }

    #[test]
    fn test_filter_without_bounds_is_fail_open() {
        let events = vec![
            event("1", Some((10.45, -84.01))),
            event("2", None),
            event("3", Some((10.32, -83.96))),
        ];

        let visible = visible_events(&events, None);
        assert_eq!(visible.len(), events.len());
        let ids: Vec<&str> = visible.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let events = vec![
            event("3", Some((10.41, -84.00))),
            event("1", Some((10.42, -84.01))),
            event("2", Some((10.43, -84.02))),
        ];
        let bounds = LatLngBounds::from_coords(10.40, -84.05, 10.50, -83.95);

        let ids: Vec<&str> = visible_events(&events, Some(&bounds))
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_unlocated_never_visible_even_without_bounds_filtering() {
        let events = vec![event("2", None)];
        let bounds = LatLngBounds::from_coords(-90.0, -180.0, 90.0, 180.0);

        assert!(visible_events(&events, Some(&bounds)).is_empty());
    }
}
