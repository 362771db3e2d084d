//! Headless walkthrough of the event map core: loads the mock event list,
//! applies the initial view, filters visible events as the viewport moves,
//! and swaps in a GPX route. Pass a GPX URL as the first argument to fetch a
//! real track instead of the embedded sample.

use anyhow::Result;
use futures::join;
use ridemap::prelude::*;

const SAMPLE_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="ridemap" xmlns="http://www.topografix.com/GPX/1/1">
  <trk><name>Vuelta al Sarapiqui</name><trkseg>
    <trkpt lat="10.4550" lon="-84.0100"></trkpt>
    <trkpt lat="10.4402" lon="-84.0315"></trkpt>
    <trkpt lat="10.4185" lon="-84.0890"></trkpt>
  </trkseg></trk>
</gpx>"#;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let source = MockEventSource::new();
    let mut map = EventMap::new(Point::new(800.0, 600.0));
    let bounds_rx = map.subscribe_bounds();

    println!("loading events...");
    let (events, featured) = join!(source.list_events(), source.event_by_id("1"));
    println!("{} events loaded", events.len());
    map.set_events(events);

    map.apply_initial_view();
    let bounds = bounds_rx.recv()?;
    println!(
        "initial view: center ({:.4}, {:.4}) zoom {} bounds [{:.4}, {:.4}] .. [{:.4}, {:.4}]",
        map.viewport().center().lat,
        map.viewport().center().lng,
        map.viewport().zoom(),
        bounds.south(),
        bounds.west(),
        bounds.north(),
        bounds.east(),
    );

    for event in map.visible_events() {
        println!("  visible: {} ({})", event.name, event.location.address);
    }

    if let Some(event) = &featured {
        map.click_marker(&event.id);
        if let Some(popup) = map.scene().popup {
            println!(
                "selected {} with popup at ({:.4}, {:.4})",
                popup.event_id, popup.anchor.lat, popup.anchor.lng
            );
        }
    }

    let track = match std::env::args().nth(1) {
        Some(url) => {
            println!("fetching route from {url}...");
            let loader = TrackLoader::new();
            loader.load(&url).await?
        }
        None => parse_track(SAMPLE_GPX)?,
    };
    println!("route with {} points", track.len());

    map.set_track(track);
    map.apply_initial_view();
    let scene = map.scene();
    println!(
        "route view: zoom {} markers {} route shown: {}",
        scene.zoom,
        scene.markers.len(),
        scene.route.is_some()
    );

    Ok(())
}
