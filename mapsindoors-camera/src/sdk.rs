//! The part of a native map SDK the adapter talks to.

use std::time::Duration;

use crate::camera::{CameraOptions, CameraState};
use crate::geo::{EdgeInsets, LatLng};

/// Listener called once when an easing animation ends.
pub type OnAnimationFinished = Box<dyn FnOnce() + Send + 'static>;

/// Parameters of an animated camera transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationOptions {
    /// Length of the transition.
    pub duration: Duration,
}

impl AnimationOptions {
    /// Animation lasting the given number of milliseconds. Negative values mean no animation.
    pub fn from_millis(duration_ms: i32) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms.max(0) as u64),
        }
    }
}

/// Live map handle of a map SDK.
///
/// All methods take `&self`: the handle is shared with the hosting view and keeps its own
/// state behind interior mutability, the same way a native SDK object does.
pub trait MapSdk {
    /// Current camera state.
    fn camera_state(&self) -> CameraState;

    /// Applies the options immediately. `None` is forwarded as-is from an unset camera update.
    fn set_camera(&self, options: Option<&CameraOptions>);

    /// Starts an eased transition to the options.
    ///
    /// `on_finished` must be called exactly once, after the transition ends or is cancelled.
    fn ease_to(
        &self,
        options: Option<&CameraOptions>,
        animation: AnimationOptions,
        on_finished: OnAnimationFinished,
    );

    /// Computes camera options showing all the `coordinates` inside the viewport shrunk by
    /// `padding`. `bearing` and `pitch`, when given, are set on the result.
    fn camera_for_coordinates(
        &self,
        coordinates: &[LatLng],
        camera: &CameraOptions,
        padding: EdgeInsets,
        bearing: Option<f64>,
        pitch: Option<f64>,
    ) -> CameraOptions;
}
