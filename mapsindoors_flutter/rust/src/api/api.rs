//! Main API of the MapsIndoors Flutter bridge.
//!
//! This module provides the interface between Dart and Rust for
//! moving, animating and configuring map views.

use flutter_rust_bridge::frb;
use log::{debug, info};
use mapsindoors_camera::{CameraUpdate, CameraUpdatePayload, ReadableMap};

use crate::api::dart_types::*;
use crate::core::map_session::SessionID;
use crate::core::{get_session, MapSession, SESSIONS, TOKIO_RUNTIME};

/// Decodes a JSON camera update. A payload without mode is the unset update.
fn decode_camera_update(update_json: &str) -> anyhow::Result<Option<CameraUpdate>> {
    let update = CameraUpdatePayload::from_json(update_json)?.into_update()?;
    Ok(update)
}

/// Creates a new map view session and returns its id.
pub fn create_map_view(config: MapInitConfig) -> anyhow::Result<SessionID> {
    let session = MapSession::new(config, TOKIO_RUNTIME.handle())?;
    info!("Map view session {} created", session.session_id);
    Ok(session.session_id)
}

/// Eases the camera of the session. Completes once the transition is over.
pub async fn animate_camera(
    session_id: SessionID,
    update_json: String,
    duration_ms: i32,
) -> anyhow::Result<()> {
    let update = decode_camera_update(&update_json)?;
    let done = get_session(session_id)?.animate_camera(update, duration_ms);
    done.await;
    debug!("Camera animation of session {} finished", session_id);
    Ok(())
}

/// Moves the camera of the session without animation.
pub fn move_camera(session_id: SessionID, update_json: String) -> anyhow::Result<()> {
    let update = decode_camera_update(&update_json)?;
    get_session(session_id)?.move_camera(update);
    Ok(())
}

#[frb(sync)]
pub fn get_current_camera_position(session_id: SessionID) -> anyhow::Result<DartCameraPosition> {
    Ok(get_session(session_id)?.camera_position().into())
}

/// Builds the map configuration from the options dictionary sent as JSON.
pub fn parse_config(session_id: SessionID, config_json: String) -> anyhow::Result<DartMapConfig> {
    let options = ReadableMap::from_json(&config_json)?;
    let config = get_session(session_id)?.parse_config(&options)?;
    Ok(config.into())
}

pub fn resize_map_view(session_id: SessionID, size: MapSize) -> anyhow::Result<()> {
    get_session(session_id)?.resize(size);
    Ok(())
}

/// Changes how often running camera animations are advanced.
pub fn set_animation_fps(session_id: SessionID, fps: u32) -> anyhow::Result<()> {
    get_session(session_id)?.animation_loop().set_fps(fps)?;
    Ok(())
}

/// Marks the session as paused (app in background) or resumed.
pub fn set_session_active(session_id: SessionID, active: bool) -> anyhow::Result<()> {
    let session = get_session(session_id)?;
    if active {
        session.animation_loop().resume()?;
    } else {
        session.animation_loop().pause()?;
    }
    Ok(())
}

/// Destroys a specific session
pub fn destroy_session(session_id: SessionID) {
    debug!("destroy_session called for session {}", session_id);
    match SESSIONS.lock().remove(&session_id) {
        Some(session) => {
            session.terminate();
            info!("Session {} destroyed", session_id);
        }
        None => info!("Session {session_id} does not exist"),
    }
}
