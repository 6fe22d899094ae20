//! Camera and configuration adapter between a cross-platform map view and a native map SDK.
//!
//! Higher level UI code talks to the map through the [`MapViewAdapter`] trait: it asks the map to
//! move or animate its camera, reads the current camera back, and turns a loosely typed
//! configuration dictionary into a [`MapConfig`]. A concrete adapter translates these generic
//! requests into the calls of a particular map SDK.
//!
//! # Main components
//!
//! * [`CameraUpdate`] describes how the camera should change: center on a point, fit bounds,
//!   zoom by or to a value, or jump to a full [`CameraPosition`].
//! * [`MapSdk`] is the small part of a native map SDK the adapter needs: read the camera
//!   state, set it, ease to it, and compute a camera that fits a set of coordinates.
//! * [`PlatformContext`] is the hosting UI context, providing display density and string
//!   resources (the SDK API key lives there).
//! * [`MapboxMapView`] implements [`MapViewAdapter`] on top of any [`MapSdk`].
//! * [`HeadlessMap`] is an in-process [`MapSdk`] implementation. It keeps the camera state,
//!   runs easing animations when [`HeadlessMap::animate`] is called, and fits bounds in Web
//!   Mercator. It is used by the Flutter bridge and in tests.
//!
//! ```no_run
//! use mapsindoors_camera::{
//!     CameraUpdate, HeadlessMap, LatLng, MapViewAdapter, MapboxMapView, StaticPlatformContext,
//!     ViewportSize,
//! };
//!
//! let map = HeadlessMap::new(ViewportSize::new(1080, 1920));
//! let context = StaticPlatformContext::new(2.0).with_resource("mapbox_api_key", "secret");
//! let adapter = MapboxMapView::new(&map, &context);
//!
//! adapter.move_camera(Some(&CameraUpdate::FromPoint(LatLng::new(55.67, 12.56))));
//! let position = adapter.current_camera_position();
//! ```

pub mod adapter;
pub mod camera;
pub mod config;
mod error;
pub mod geo;
pub mod headless;
pub mod platform;
pub mod sdk;

pub use adapter::{animate_camera_async, MapViewAdapter, MapboxMapView, OnResultReady};
pub use camera::{CameraOptions, CameraPosition, CameraState, CameraUpdate, CameraUpdatePayload};
pub use config::{LabelFont, MapConfig, MapConfigBuilder, ReadableMap, Typeface, TypefaceStyle};
pub use error::AdapterError;
pub use geo::{EdgeInsets, LatLng, LatLngBounds, MercatorGrid};
pub use headless::{HeadlessMap, ViewportSize};
pub use platform::{PlatformContext, StaticPlatformContext, MAPBOX_API_KEY_RESOURCE};
pub use sdk::{AnimationOptions, MapSdk, OnAnimationFinished};
