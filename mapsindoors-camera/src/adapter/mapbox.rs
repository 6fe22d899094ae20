use log::{debug, trace};

use crate::adapter::{MapViewAdapter, OnResultReady};
use crate::camera::{CameraOptions, CameraPosition, CameraUpdate};
use crate::config::{self, MapConfig, MapConfigBuilder, ReadableMap};
use crate::error::AdapterError;
use crate::geo::EdgeInsets;
use crate::platform::{PlatformContext, MAPBOX_API_KEY_RESOURCE};
use crate::sdk::{AnimationOptions, MapSdk};

/// [`MapViewAdapter`] translating generic camera requests into [`MapSdk`] calls.
///
/// Holds borrowed handles to the live map and to the hosting UI context; both outlive the
/// adapter.
pub struct MapboxMapView<'a, M: ?Sized, C: ?Sized> {
    map: &'a M,
    context: &'a C,
}

impl<'a, M, C> MapboxMapView<'a, M, C>
where
    M: MapSdk + ?Sized,
    C: PlatformContext + ?Sized,
{
    /// Creates an adapter for the map hosted in `context`.
    pub fn new(map: &'a M, context: &'a C) -> Self {
        Self { map, context }
    }

    /// Translates the update into SDK camera options. Returns `None` for an unset update.
    pub fn to_camera_options(&self, update: Option<&CameraUpdate>) -> Option<CameraOptions> {
        let update = update?;
        let options = match *update {
            CameraUpdate::FromPoint(point) => CameraOptions::center(point),
            CameraUpdate::FromBounds { bounds, padding } => {
                let padding = (self.context.display_density() * padding as f32) as f64;
                self.map.camera_for_coordinates(
                    &[bounds.south_west, bounds.north_east],
                    &CameraOptions::default(),
                    EdgeInsets::uniform(padding),
                    None,
                    None,
                )
            }
            CameraUpdate::ZoomBy(delta) => {
                CameraOptions::zoom(self.map.camera_state().zoom + delta as f64)
            }
            CameraUpdate::ZoomTo(zoom) => CameraOptions::zoom(zoom as f64),
            CameraUpdate::FromCameraPosition(position) => position.into(),
        };

        trace!("Camera update {update:?} translated to {options:?}");
        Some(options)
    }
}

impl<M, C> MapViewAdapter for MapboxMapView<'_, M, C>
where
    M: MapSdk + ?Sized,
    C: PlatformContext + ?Sized,
{
    fn animate_camera(
        &self,
        update: Option<&CameraUpdate>,
        duration_ms: i32,
        on_finished: OnResultReady,
    ) {
        let options = self.to_camera_options(update);
        debug!("Animating camera over {duration_ms} ms to {options:?}");
        self.map.ease_to(
            options.as_ref(),
            AnimationOptions::from_millis(duration_ms),
            on_finished,
        );
    }

    fn move_camera(&self, update: Option<&CameraUpdate>) {
        let options = self.to_camera_options(update);
        debug!("Moving camera to {options:?}");
        self.map.set_camera(options.as_ref());
    }

    fn current_camera_position(&self) -> CameraPosition {
        self.map.camera_state().to_position()
    }

    fn parse_config(
        &self,
        options: &ReadableMap,
        platform: &dyn PlatformContext,
    ) -> Result<MapConfig, AdapterError> {
        let api_key = platform
            .resource_string(MAPBOX_API_KEY_RESOURCE)
            .ok_or_else(|| AdapterError::MissingResource(MAPBOX_API_KEY_RESOURCE.to_string()))?;
        let use_default_style = config::use_default_style(options)?;

        let mut builder = MapConfigBuilder::new(api_key, use_default_style);
        config::apply_options(&mut builder, options)?;
        let config = builder.build();

        debug!(
            "Map config parsed: default style {}, {} explicit settings",
            config.use_default_style,
            config.explicit_settings()
        );
        Ok(config)
    }
}
