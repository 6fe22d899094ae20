use std::future::Future;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use log::{debug, info, warn};
use mapsindoors_camera::{
    animate_camera_async, AdapterError, CameraOptions, CameraPosition, CameraUpdate, HeadlessMap,
    MapConfig, MapSdk, MapViewAdapter, MapboxMapView, ReadableMap, StaticPlatformContext,
};
use tokio::runtime::Handle;

use crate::api::dart_types::{MapInitConfig, MapSize};
use crate::core::{AnimationLoop, SESSIONS, SESSION_COUNTER};

pub type SessionID = u32;

/// Map view session: a headless map, the context hosting it, and the loop animating it.
pub struct MapSession {
    pub session_id: SessionID,
    map: Arc<HeadlessMap>,
    context: StaticPlatformContext,
    animation_loop: AnimationLoop,
}

impl MapSession {
    /// Creates a session, registers it and starts its animation loop on `runtime`.
    pub fn new(config: MapInitConfig, runtime: &Handle) -> anyhow::Result<Arc<MapSession>> {
        let session_id = create_new_session();
        info!(
            "Creating map view session {} with size {}x{}",
            session_id, config.map_size.width, config.map_size.height
        );

        let map = Arc::new(HeadlessMap::new(config.map_size.as_viewport()));
        map.set_compass_visible(config.show_compass);
        if let Some(style) = &config.map_style {
            map.set_style_uri(style.clone());
        }
        if let Some(camera) = &config.camera {
            match serde_json::from_str::<CameraPosition>(camera) {
                Ok(position) => map.set_camera(Some(&CameraOptions::from(position))),
                Err(err) => warn!("Ignoring invalid initial camera of session {session_id}: {err}"),
            }
        }

        let context = StaticPlatformContext::new(config.density).with_resources(config.resources);

        let animation_loop = AnimationLoop::spawn(runtime, map.clone(), config.animation);
        animation_loop
            .start()
            .map_err(|e| anyhow::anyhow!("Failed to start animation loop: {}", e))?;

        let session = Arc::new(MapSession {
            session_id,
            map,
            context,
            animation_loop,
        });

        SESSIONS.lock().insert(session_id, session.clone());
        Ok(session)
    }

    fn adapter(&self) -> MapboxMapView<'_, HeadlessMap, StaticPlatformContext> {
        MapboxMapView::new(self.map.as_ref(), &self.context)
    }

    pub fn animation_loop(&self) -> &AnimationLoop {
        &self.animation_loop
    }

    /// Starts a camera animation. The returned future resolves when it ends.
    pub fn animate_camera(
        &self,
        update: Option<CameraUpdate>,
        duration_ms: i32,
    ) -> impl Future<Output = ()> + Send + 'static {
        animate_camera_async(&self.adapter(), update.as_ref(), duration_ms)
    }

    pub fn move_camera(&self, update: Option<CameraUpdate>) {
        self.adapter().move_camera(update.as_ref());
    }

    pub fn camera_position(&self) -> CameraPosition {
        self.adapter().current_camera_position()
    }

    pub fn parse_config(&self, options: &ReadableMap) -> Result<MapConfig, AdapterError> {
        self.adapter().parse_config(options, &self.context)
    }

    pub fn resize(&self, new_size: MapSize) {
        info!(
            "Resizing session {} to {}x{}",
            self.session_id, new_size.width, new_size.height
        );
        self.map.set_size(new_size.as_viewport());
    }

    /// Stops the animation loop. A running camera animation is left where it is.
    pub fn terminate(&self) {
        if let Err(err) = self.animation_loop.stop() {
            debug!("Animation loop of session {} already gone: {err}", self.session_id);
        }
    }
}

/// Updates the session counter and returns a new session ID
fn create_new_session() -> SessionID {
    SESSION_COUNTER.fetch_add(1, Ordering::SeqCst) + 1
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use mapsindoors_camera::{LatLng, MAPBOX_API_KEY_RESOURCE};

    use super::*;

    impl MapSession {
        fn map(&self) -> &HeadlessMap {
            &self.map
        }
    }

    fn init_config() -> MapInitConfig {
        let mut config = MapInitConfig::new(MapSize { width: 800, height: 600 }, 2.0);
        config.resources = HashMap::from([(
            MAPBOX_API_KEY_RESOURCE.to_string(),
            "pk.session".to_string(),
        )]);
        config
    }

    #[tokio::test]
    async fn initial_camera_and_ornaments_are_applied() {
        let mut config = init_config();
        config.camera = Some(
            r#"{"zoom": 18.0, "tilt": 0.0, "bearing": 45.0, "target": {"latitude": 57.05, "longitude": 9.95}}"#
                .to_string(),
        );
        config.show_compass = false;
        config.map_style = Some("mapbox://styles/mapbox/light-v11".to_string());

        let session = MapSession::new(config, &Handle::current()).expect("session created");

        let position = session.camera_position();
        assert_eq!(position.zoom, 18.0);
        assert_eq!(position.bearing, 45.0);
        assert_eq!(position.target, LatLng::new(57.05, 9.95));
        assert!(!session.map().is_compass_visible());
        assert_eq!(
            session.map().style_uri().as_deref(),
            Some("mapbox://styles/mapbox/light-v11")
        );

        session.terminate();
        SESSIONS.lock().remove(&session.session_id);
    }

    #[tokio::test]
    async fn invalid_initial_camera_keeps_default_view() {
        let mut config = init_config();
        config.camera = Some("not json".to_string());

        let session = MapSession::new(config, &Handle::current()).expect("session created");

        assert_eq!(session.camera_position().zoom, 2.0);
        SESSIONS.lock().remove(&session.session_id);
    }

    #[tokio::test]
    async fn animation_resolves_through_session_loop() {
        let session = MapSession::new(init_config(), &Handle::current()).expect("session created");

        session
            .animate_camera(Some(CameraUpdate::ZoomTo(15.0)), 40)
            .await;

        assert_eq!(session.camera_position().zoom, 15.0);
        SESSIONS.lock().remove(&session.session_id);
    }

    #[tokio::test]
    async fn config_uses_session_resources() {
        let session = MapSession::new(init_config(), &Handle::current()).expect("session created");

        let config = session
            .parse_config(&ReadableMap::new().with("showUserPosition", true))
            .expect("valid config");

        assert_eq!(config.api_key, "pk.session");
        assert_eq!(config.show_user_position, Some(true));
        SESSIONS.lock().remove(&session.session_id);
    }
}
