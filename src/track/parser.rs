//! GPX text parsing into a [`Track`].

use crate::core::geo::LatLng;
use crate::track::{Track, TrackError};

/// Parses GPX text into an ordered route track.
///
/// The first `<trk>` element is used; its segments are flattened in file
/// order. Fails with [`TrackError::Parse`] when the document is not GPX or
/// contains no track points, and with [`TrackError::InsufficientPoints`]
/// when fewer than two points remain.
pub fn parse_track(text: &str) -> Result<Track, TrackError> {
    let gpx = gpx::read(text.as_bytes()).map_err(|e| TrackError::Parse(e.to_string()))?;

    let track = gpx
        .tracks
        .first()
        .ok_or_else(|| TrackError::Parse("GPX file contains no tracks".to_string()))?;

    let mut points = Vec::new();
    for segment in &track.segments {
        for waypoint in &segment.points {
            let position = waypoint.point();
            match LatLng::try_new(position.y(), position.x()) {
                Some(coord) => points.push(coord),
                None => {
                    log::warn!(
                        "skipping track point with non-finite coordinates ({}, {})",
                        position.y(),
                        position.x()
                    );
                }
            }
        }
    }

    if points.is_empty() {
        return Err(TrackError::Parse(
            "GPX file contains no valid track points".to_string(),
        ));
    }

    Track::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpx_with_points(points: &[(f64, f64)]) -> String {
        let mut body = String::new();
        for (lat, lon) in points {
            body.push_str(&format!("<trkpt lat=\"{lat}\" lon=\"{lon}\"></trkpt>"));
        }
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <gpx version=\"1.1\" creator=\"ridemap-test\" \
                  xmlns=\"http://www.topografix.com/GPX/1/1\">\
             <trk><name>ruta</name><trkseg>{body}</trkseg></trk></gpx>"
        )
    }

    #[test]
    fn test_parse_preserves_point_order() {
        let text = gpx_with_points(&[(10.0, -84.0), (10.1, -84.1)]);
        let track = parse_track(&text).unwrap();

        assert_eq!(
            track.points(),
            &[LatLng::new(10.0, -84.0), LatLng::new(10.1, -84.1)]
        );
    }

    #[test]
    fn test_parse_single_point_fails() {
        let text = gpx_with_points(&[(10.0, -84.0)]);
        let err = parse_track(&text).unwrap_err();
        assert!(matches!(err, TrackError::InsufficientPoints { count: 1 }));
    }

    #[test]
    fn test_parse_empty_track_fails() {
        let text = gpx_with_points(&[]);
        assert!(matches!(parse_track(&text), Err(TrackError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_non_gpx() {
        assert!(matches!(
            parse_track("{\"not\": \"gpx\"}"),
            Err(TrackError::Parse(_))
        ));
        assert!(matches!(parse_track(""), Err(TrackError::Parse(_))));
    }

    #[test]
    fn test_parse_flattens_segments_in_order() {
        let text = "<?xml version=\"1.0\"?>\
            <gpx version=\"1.1\" creator=\"ridemap-test\" \
                 xmlns=\"http://www.topografix.com/GPX/1/1\">\
            <trk><trkseg>\
            <trkpt lat=\"10.0\" lon=\"-84.0\"></trkpt>\
            </trkseg><trkseg>\
            <trkpt lat=\"10.2\" lon=\"-84.2\"></trkpt>\
            </trkseg></trk></gpx>";
        let track = parse_track(text).unwrap();
        assert_eq!(
            track.points(),
            &[LatLng::new(10.0, -84.0), LatLng::new(10.2, -84.2)]
        );
    }
}
