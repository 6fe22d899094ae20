//! Core implementation modules for the MapsIndoors Flutter bridge.
//!
//! This module contains the internal implementation details for:
//! - Map view sessions owning a headless map and its platform context
//! - FPS-controlled loops advancing camera animations
//! - Logging setup

pub mod animation_loop;
pub mod map_session;

pub use animation_loop::AnimationLoop;
pub use map_session::{MapSession, SessionID};

use log::debug;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

lazy_static::lazy_static! {
    static ref LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);
    static ref WORKER_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> = Mutex::new(None);
    pub static ref SESSION_COUNTER: AtomicU32 = AtomicU32::new(0);
    pub static ref SESSIONS: Mutex<HashMap<SessionID, Arc<MapSession>>> = Mutex::new(HashMap::new());
    pub static ref TOKIO_RUNTIME: Runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("mapsindoors-flutter")
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");
}

pub(crate) fn init_logger() {
    if LOGGER_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }
    let file_appender = tracing_appender::rolling::daily("./logs", "mapsindoors_flutter.log");
    let (non_blocking_file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file_writer)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);
    // Default to info level if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Global logger is already set: {err}");
        return;
    }

    // keep the guard alive for the file writer
    WORKER_GUARD.lock().replace(guard);
    flutter_rust_bridge::setup_default_user_utils();
    debug!("Done initializing");
}

/// Returns the session with the given id.
pub(crate) fn get_session(session_id: SessionID) -> anyhow::Result<Arc<MapSession>> {
    SESSIONS
        .lock()
        .get(&session_id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Session {} not found", session_id))
}
