//! Generic map view contract and its SDK-backed implementation.

use std::future::Future;

use crate::camera::{CameraPosition, CameraUpdate};
use crate::config::{MapConfig, ReadableMap};
use crate::error::AdapterError;
use crate::platform::PlatformContext;

mod mapbox;

pub use mapbox::MapboxMapView;

/// Completion signal of [`MapViewAdapter::animate_camera`]. Carries no result.
pub type OnResultReady = Box<dyn FnOnce() + Send + 'static>;

/// Camera and configuration operations a map view exposes to cross-platform code.
///
/// Every SDK backend implements this trait. Calls are made from the UI thread and are not
/// reentrant.
pub trait MapViewAdapter {
    /// Eases the camera to the update over `duration_ms` milliseconds and calls `on_finished`
    /// once the transition is over.
    ///
    /// An unset update (`None`) is handed to the SDK unchanged.
    fn animate_camera(
        &self,
        update: Option<&CameraUpdate>,
        duration_ms: i32,
        on_finished: OnResultReady,
    );

    /// Applies the update immediately.
    fn move_camera(&self, update: Option<&CameraUpdate>);

    /// Reads the current camera of the map.
    fn current_camera_position(&self) -> CameraPosition;

    /// Builds the map configuration from the options dictionary.
    fn parse_config(
        &self,
        options: &ReadableMap,
        platform: &dyn PlatformContext,
    ) -> Result<MapConfig, AdapterError>;
}

/// Starts [`MapViewAdapter::animate_camera`] and returns a future resolving once the
/// transition has finished.
///
/// The future resolves exactly once. If the SDK drops the completion listener without calling
/// it, the future resolves as well.
pub fn animate_camera_async(
    adapter: &dyn MapViewAdapter,
    update: Option<&CameraUpdate>,
    duration_ms: i32,
) -> impl Future<Output = ()> + Send + 'static {
    let (sender, receiver) = futures::channel::oneshot::channel::<()>();
    adapter.animate_camera(
        update,
        duration_ms,
        Box::new(move || {
            let _ = sender.send(());
        }),
    );

    async move {
        if receiver.await.is_err() {
            log::warn!("Camera animation listener was dropped without completion");
        }
    }
}
