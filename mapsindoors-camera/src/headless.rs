//! In-process map SDK backend.
//!
//! [`HeadlessMap`] keeps a camera, runs eased transitions and fits coordinates in Web Mercator
//! without any native SDK. Nothing is rendered. The owner drives running transitions by calling
//! [`HeadlessMap::animate`] on every frame, the same way a render loop drives a map.

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, trace, warn};
use parking_lot::Mutex;
use web_time::Instant;

use crate::camera::{CameraOptions, CameraState};
use crate::geo::{EdgeInsets, LatLng, MercatorGrid};
use crate::sdk::{AnimationOptions, MapSdk, OnAnimationFinished};

/// Size of the world tile in pixels at zoom 0.
pub const TILE_SIZE: f64 = 512.0;

const DEFAULT_ZOOM_RANGE: RangeInclusive<f64> = 0.0..=22.0;
const MAX_PITCH: f64 = 85.0;
const INITIAL_ZOOM: f64 = 2.0;

/// Physical size of the map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ViewportSize {
    /// Creates a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

struct Easing {
    from: CameraState,
    to: CameraState,
    started_at: Instant,
    duration: Duration,
    on_finished: OnAnimationFinished,
}

impl Easing {
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    fn state_at(&self, progress: f64) -> CameraState {
        let k = ease_in_out(progress);
        let lerp = |from: f64, to: f64| from + (to - from) * k;
        // Angles take the shorter way round.
        let lerp_angle = |from: f64, to: f64| from + wrap_degrees(to - from) * k;

        CameraState {
            center: LatLng::new(
                lerp(self.from.center.latitude, self.to.center.latitude),
                wrap_degrees(lerp_angle(self.from.center.longitude, self.to.center.longitude)),
            ),
            zoom: lerp(self.from.zoom, self.to.zoom),
            bearing: lerp_angle(self.from.bearing, self.to.bearing).rem_euclid(360.0),
            pitch: lerp(self.from.pitch, self.to.pitch),
            padding: EdgeInsets::new(
                lerp(self.from.padding.top, self.to.padding.top),
                lerp(self.from.padding.left, self.to.padding.left),
                lerp(self.from.padding.bottom, self.to.padding.bottom),
                lerp(self.from.padding.right, self.to.padding.right),
            ),
        }
    }
}

/// Map SDK backend living entirely in the process.
pub struct HeadlessMap {
    size: Mutex<ViewportSize>,
    zoom_range: RangeInclusive<f64>,
    state: Mutex<CameraState>,
    easing: Mutex<Option<Easing>>,
    style_uri: Mutex<Option<String>>,
    compass_visible: AtomicBool,
}

impl HeadlessMap {
    /// Creates a map of the given size looking at `(0, 0)` from zoom 2.
    pub fn new(size: ViewportSize) -> Self {
        Self::with_camera(
            size,
            CameraState {
                zoom: INITIAL_ZOOM,
                ..Default::default()
            },
        )
    }

    /// Creates a map with the given initial camera.
    pub fn with_camera(size: ViewportSize, camera: CameraState) -> Self {
        let map = Self {
            size: Mutex::new(size),
            zoom_range: DEFAULT_ZOOM_RANGE,
            state: Mutex::new(CameraState::default()),
            easing: Mutex::new(None),
            style_uri: Mutex::new(None),
            compass_visible: AtomicBool::new(true),
        };
        *map.state.lock() = map.clamp(camera);
        map
    }

    /// Viewport size.
    pub fn size(&self) -> ViewportSize {
        *self.size.lock()
    }

    /// Changes the viewport size.
    pub fn set_size(&self, size: ViewportSize) {
        debug!("Headless map resized to {}x{}", size.width, size.height);
        *self.size.lock() = size;
    }

    /// Style the map was asked to show.
    pub fn style_uri(&self) -> Option<String> {
        self.style_uri.lock().clone()
    }

    /// Sets the style URI.
    pub fn set_style_uri(&self, uri: impl Into<String>) {
        *self.style_uri.lock() = Some(uri.into());
    }

    /// Returns true if the compass ornament is shown.
    pub fn is_compass_visible(&self) -> bool {
        self.compass_visible.load(Ordering::Relaxed)
    }

    /// Shows or hides the compass ornament.
    pub fn set_compass_visible(&self, visible: bool) {
        self.compass_visible.store(visible, Ordering::Relaxed);
    }

    /// Returns true while an eased transition is running.
    pub fn is_animating(&self) -> bool {
        self.easing.lock().is_some()
    }

    /// Advances the running transition to the current time.
    ///
    /// Returns true if a transition is still running after this call.
    pub fn animate(&self) -> bool {
        self.animate_at(Instant::now())
    }

    /// Advances the running transition to `now`.
    ///
    /// When the transition reaches its end, the final camera is applied and the completion
    /// listener is called. Returns true if a transition is still running after this call.
    pub fn animate_at(&self, now: Instant) -> bool {
        let finished = {
            let mut easing = self.easing.lock();
            let Some(current) = easing.as_ref() else {
                return false;
            };

            let progress = current.progress(now);
            if progress < 1.0 {
                *self.state.lock() = current.state_at(progress);
                trace!("Camera easing progress {progress:.3}");
                return true;
            }

            *self.state.lock() = current.to;
            easing.take()
        };

        if let Some(easing) = finished {
            debug!("Camera easing finished");
            (easing.on_finished)();
        }

        false
    }

    fn clamp(&self, mut state: CameraState) -> CameraState {
        state.zoom = state
            .zoom
            .clamp(*self.zoom_range.start(), *self.zoom_range.end());
        state.pitch = state.pitch.clamp(0.0, MAX_PITCH);
        state
    }

    /// Replaces the running easing and completes the one it replaces.
    ///
    /// The swap is a single critical section. The replaced listener is called after the lock
    /// is released.
    fn replace_easing(&self, easing: Option<Easing>) {
        let replaced = std::mem::replace(&mut *self.easing.lock(), easing);
        if let Some(replaced) = replaced {
            debug!("Running camera easing cancelled");
            (replaced.on_finished)();
        }
    }
}

impl MapSdk for HeadlessMap {
    fn camera_state(&self) -> CameraState {
        *self.state.lock()
    }

    fn set_camera(&self, options: Option<&CameraOptions>) {
        let Some(options) = options else {
            warn!("Ignoring camera change without options");
            return;
        };

        self.replace_easing(None);
        let mut state = self.state.lock();
        *state = self.clamp(state.merged(options));
    }

    fn ease_to(
        &self,
        options: Option<&CameraOptions>,
        animation: AnimationOptions,
        on_finished: OnAnimationFinished,
    ) {
        let Some(options) = options else {
            warn!("Camera easing without options finishes immediately");
            self.replace_easing(None);
            on_finished();
            return;
        };

        let from = self.camera_state();
        let target = self.clamp(from.merged(options));
        if animation.duration.is_zero() {
            self.replace_easing(None);
            *self.state.lock() = target;
            on_finished();
            return;
        }

        self.replace_easing(Some(Easing {
            from,
            to: target,
            started_at: Instant::now(),
            duration: animation.duration,
            on_finished,
        }));
    }

    fn camera_for_coordinates(
        &self,
        coordinates: &[LatLng],
        camera: &CameraOptions,
        padding: EdgeInsets,
        bearing: Option<f64>,
        pitch: Option<f64>,
    ) -> CameraOptions {
        let mut result = CameraOptions {
            padding: Some(padding),
            bearing: bearing.or(camera.bearing),
            pitch: pitch.or(camera.pitch),
            ..Default::default()
        };

        let Some(grid) = MercatorGrid::new() else {
            warn!("Web Mercator projection is not available, camera is not fitted");
            return result;
        };
        let Some((min, max)) = mercator_extent(&grid, coordinates) else {
            warn!("Cannot fit camera to an empty coordinate list");
            return result;
        };

        let size = self.size();
        let available_width = (size.width as f64 - padding.horizontal()).max(1.0);
        let available_height = (size.height as f64 - padding.vertical()).max(1.0);

        let span_x = (max.0 - min.0) * TILE_SIZE;
        let span_y = (max.1 - min.1) * TILE_SIZE;
        let zoom = match (span_x > 0.0, span_y > 0.0) {
            (false, false) => *self.zoom_range.end(),
            (true, false) => (available_width / span_x).log2(),
            (false, true) => (available_height / span_y).log2(),
            (true, true) => (available_width / span_x)
                .min(available_height / span_y)
                .log2(),
        };

        result.center = grid.unproject((min.0 + max.0) / 2.0, (min.1 + max.1) / 2.0);
        result.zoom = Some(zoom.clamp(*self.zoom_range.start(), *self.zoom_range.end()));
        result
    }
}

fn mercator_extent(
    grid: &MercatorGrid,
    coordinates: &[LatLng],
) -> Option<((f64, f64), (f64, f64))> {
    let mut points = coordinates.iter().filter_map(|point| {
        let projected = grid.project(*point);
        if projected.is_none() {
            warn!("Skipping coordinate {point:?} outside of Web Mercator");
        }
        projected
    });
    let first = points.next()?;

    Some(points.fold((first, first), |(min, max), (x, y)| {
        ((min.0.min(x), min.1.min(y)), (max.0.max(x), max.1.max(y)))
    }))
}

fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Wraps an angle in degrees into `[-180, 180)`.
fn wrap_degrees(angle: f64) -> f64 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}
