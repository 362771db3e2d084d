use crate::core::constants::{DEFAULT_CENTER, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::core::geo::{LatLng, LatLngBounds, Point};
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Owns the current view of the map: center, zoom, and screen dimensions.
///
/// All view mutation goes through this controller (fit/fly operations or the
/// pan/zoom gesture entry points); other components read the view via
/// [`Viewport::bounds`] or the bounds-change channel and never write it.
#[derive(Debug)]
pub struct Viewport {
    center: LatLng,
    zoom: f64,
    /// The size of the viewport in pixels
    size: Point,
    min_zoom: f64,
    max_zoom: f64,
    /// Listeners notified with the current bounds on every settle
    subscribers: Vec<Sender<LatLngBounds>>,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center: Self::clamp_center(center),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            size,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            subscribers: Vec::new(),
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn size(&self) -> Point {
        self.size
    }

    /// Sets the viewport size in pixels
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Sets the zoom limits, clamping the current zoom into the new range
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Registers a bounds-change listener.
    ///
    /// Every settle delivers the new bounds, including the initial one after
    /// the first view is applied, so consumers never observe a missing first
    /// report.
    pub fn subscribe(&mut self) -> Receiver<LatLngBounds> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Reports the viewport as settled, emitting current bounds to listeners.
    pub fn settle(&mut self) {
        let bounds = self.bounds();
        self.subscribers.retain(|tx| tx.send(bounds.clone()).is_ok());
    }

    /// Sets center and zoom directly; used for single-entity focus.
    pub fn center_on(&mut self, point: LatLng, zoom: f64) {
        self.center = Self::clamp_center(point);
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the zoom level, keeping the current center
    pub fn zoom_to(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Pans the viewport by the given pixel offset
    pub fn pan(&mut self, delta: Point) {
        let center_pixel = self.center.to_world_pixel(self.zoom);
        let new_center = LatLng::from_world_pixel(center_pixel.add(&delta), self.zoom);
        self.center = Self::clamp_center(new_center);
    }

    /// Fits the viewport to contain the given bounds with pixel padding on
    /// all sides, optionally capping the resulting zoom.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: f64, max_zoom: Option<f64>) {
        self.center = Self::clamp_center(bounds.center());

        let inner = Point::new(
            (self.size.x - 2.0 * padding).max(1.0),
            (self.size.y - 2.0 * padding).max(1.0),
        );

        // Walk integer zooms up from the minimum and keep the last one where
        // the projected bounds still fit inside the padded viewport.
        let mut best_zoom = self.min_zoom;
        for test_zoom in (self.min_zoom as i32)..=(self.max_zoom as i32) {
            let zoom = test_zoom as f64;

            let nw = LatLng::new(bounds.north(), bounds.west()).to_world_pixel(zoom);
            let se = LatLng::new(bounds.south(), bounds.east()).to_world_pixel(zoom);

            let width = (se.x - nw.x).abs();
            let height = (se.y - nw.y).abs();

            if width <= inner.x && height <= inner.y {
                best_zoom = zoom;
            } else {
                break;
            }
        }

        if let Some(cap) = max_zoom {
            best_zoom = best_zoom.min(cap);
        }
        self.zoom = best_zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Fits the viewport to the minimal bounds enclosing all given points.
    ///
    /// No-op on an empty slice; returns whether the view changed.
    pub fn fit_to_points(&mut self, points: &[LatLng], padding: f64, max_zoom: Option<f64>) -> bool {
        let Some(bounds) = LatLngBounds::from_points(points) else {
            log::debug!("fit_to_points called with no points, leaving view unchanged");
            return false;
        };
        self.fit_bounds(&bounds, padding, max_zoom);
        true
    }

    /// Gets the current viewport bounds in geographical coordinates
    pub fn bounds(&self) -> LatLngBounds {
        let center_pixel = self.center.to_world_pixel(self.zoom);
        let half = Point::new(self.size.x / 2.0, self.size.y / 2.0);

        let nw = LatLng::from_world_pixel(center_pixel.subtract(&half), self.zoom);
        let se = LatLng::from_world_pixel(center_pixel.add(&half), self.zoom);

        LatLngBounds::new(LatLng::new(se.lat, nw.lng), LatLng::new(nw.lat, se.lng))
    }

    /// Clamps center to world bounds
    fn clamp_center(center: LatLng) -> LatLng {
        LatLng::new(
            LatLng::clamp_lat(center.lat),
            center.lng.clamp(-180.0, 180.0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_ZOOM, Point::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_viewport() -> Viewport {
        Viewport::new(DEFAULT_CENTER, DEFAULT_ZOOM, Point::new(800.0, 600.0))
    }

    #[test]
    fn test_viewport_creation() {
        let viewport = test_viewport();
        assert_eq!(viewport.zoom(), 9.0);
        assert_eq!(viewport.center().lat, 10.4550);
        assert_eq!(viewport.size().x, 800.0);
    }

    #[test]
    fn test_zoom_limits() {
        let mut viewport = test_viewport();
        viewport.set_zoom_limits(2.0, 15.0);

        viewport.zoom_to(1.0); // Below minimum
        assert_eq!(viewport.zoom(), 2.0);

        viewport.zoom_to(20.0); // Above maximum
        assert_eq!(viewport.zoom(), 15.0);
    }

    #[test]
    fn test_bounds_surround_center() {
        let viewport = test_viewport();
        let bounds = viewport.bounds();

        assert!(bounds.contains(&viewport.center()));
        assert!(bounds.south() < viewport.center().lat);
        assert!(bounds.north() > viewport.center().lat);
    }

    #[test]
    fn test_fit_to_points_empty_is_noop() {
        let mut viewport = test_viewport();
        let before_center = viewport.center();
        let before_zoom = viewport.zoom();

        assert!(!viewport.fit_to_points(&[], 50.0, None));
        assert_eq!(viewport.center(), before_center);
        assert_eq!(viewport.zoom(), before_zoom);
    }

    #[test]
    fn test_fit_to_single_point_contains_it() {
        let mut viewport = test_viewport();
        let point = LatLng::new(10.4185, -84.0890);

        assert!(viewport.fit_to_points(&[point], 50.0, None));
        assert!(viewport.bounds().contains(&point));
    }

    #[test]
    fn test_fit_bounds_contains_all_points() {
        let mut viewport = test_viewport();
        let points = [
            LatLng::new(10.4550, -84.0100),
            LatLng::new(10.3231, -83.9645),
            LatLng::new(10.4185, -84.0890),
        ];

        viewport.fit_to_points(&points, 60.0, None);
        let bounds = viewport.bounds();
        for point in &points {
            assert!(bounds.contains(point));
        }
    }

    #[test]
    fn test_fit_bounds_respects_max_zoom() {
        let mut viewport = test_viewport();
        // Two nearly coincident points would otherwise fit at a deep zoom.
        let points = [
            LatLng::new(10.4550, -84.0100),
            LatLng::new(10.4551, -84.0101),
        ];

        viewport.fit_to_points(&points, 60.0, Some(12.0));
        assert!(viewport.zoom() <= 12.0);
    }

    #[test]
    fn test_fit_is_idempotent() {
        let mut viewport = test_viewport();
        let points = [
            LatLng::new(10.4550, -84.0100),
            LatLng::new(10.3231, -83.9645),
        ];

        viewport.fit_to_points(&points, 50.0, None);
        let center = viewport.center();
        let zoom = viewport.zoom();

        viewport.fit_to_points(&points, 50.0, None);
        assert_eq!(viewport.center(), center);
        assert_eq!(viewport.zoom(), zoom);
    }

    #[test]
    fn test_settle_emits_bounds_to_subscribers() {
        let mut viewport = test_viewport();
        let rx = viewport.subscribe();

        viewport.settle();
        let bounds = rx.try_recv().expect("settle should emit bounds");
        assert_eq!(bounds, viewport.bounds());

        viewport.center_on(LatLng::new(10.3231, -83.9645), 13.0);
        viewport.settle();
        let moved = rx.try_recv().expect("settle after fly should emit bounds");
        assert!(moved.contains(&LatLng::new(10.3231, -83.9645)));
    }

    #[test]
    fn test_pan_moves_center() {
        let mut viewport = test_viewport();
        let original = viewport.center();
        viewport.pan(Point::new(120.0, -40.0));
        assert_ne!(viewport.center(), original);
    }
}
