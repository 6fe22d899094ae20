//! Camera value types shared by the adapter and the SDK backends.

use serde::{Deserialize, Serialize};

use crate::geo::{EdgeInsets, LatLng, LatLngBounds};

mod payload;

pub use payload::CameraUpdatePayload;

/// Position of the map camera as seen by the cross-platform code.
///
/// Zoom, tilt and bearing are single precision, the target keeps full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPosition {
    /// Zoom level.
    pub zoom: f32,
    /// Tilt (pitch) in degrees from the nadir.
    pub tilt: f32,
    /// Bearing in degrees clockwise from north.
    pub bearing: f32,
    /// Center of the camera.
    pub target: LatLng,
}

impl CameraPosition {
    /// Creates a new camera position.
    pub const fn new(zoom: f32, tilt: f32, bearing: f32, target: LatLng) -> Self {
        Self {
            zoom,
            tilt,
            bearing,
            target,
        }
    }
}

/// Requested change of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraUpdate {
    /// Center the camera on the point, keeping zoom, bearing and pitch.
    FromPoint(LatLng),
    /// Fit the camera so that both corners of `bounds` are visible.
    FromBounds {
        /// Area to show.
        bounds: LatLngBounds,
        /// Padding on each edge in logical pixels.
        padding: i32,
    },
    /// Change zoom relative to the current one.
    ZoomBy(f32),
    /// Set absolute zoom.
    ZoomTo(f32),
    /// Replace center, zoom, bearing and pitch.
    FromCameraPosition(CameraPosition),
}

impl CameraUpdate {
    /// Name of the mode as used on the wire.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::FromPoint(_) => payload::FROM_POINT,
            Self::FromBounds { .. } => payload::FROM_BOUNDS,
            Self::ZoomBy(_) => payload::ZOOM_BY,
            Self::ZoomTo(_) => payload::ZOOM_TO,
            Self::FromCameraPosition(_) => payload::FROM_CAMERA_POSITION,
        }
    }
}

/// Camera change passed to the SDK. Fields left as `None` keep the current SDK value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraOptions {
    /// New camera center.
    pub center: Option<LatLng>,
    /// New zoom level.
    pub zoom: Option<f64>,
    /// New bearing in degrees.
    pub bearing: Option<f64>,
    /// New pitch in degrees.
    pub pitch: Option<f64>,
    /// New viewport padding in physical pixels.
    pub padding: Option<EdgeInsets>,
}

impl CameraOptions {
    /// Options moving only the center.
    pub fn center(center: LatLng) -> Self {
        Self {
            center: Some(center),
            ..Default::default()
        }
    }

    /// Options changing only the zoom.
    pub fn zoom(zoom: f64) -> Self {
        Self {
            zoom: Some(zoom),
            ..Default::default()
        }
    }
}

impl From<CameraPosition> for CameraOptions {
    fn from(position: CameraPosition) -> Self {
        Self {
            center: Some(position.target),
            zoom: Some(position.zoom as f64),
            bearing: Some(position.bearing as f64),
            pitch: Some(position.tilt as f64),
            padding: None,
        }
    }
}

/// Live camera of an SDK map.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    /// Center of the (padded) viewport.
    pub center: LatLng,
    /// Zoom level.
    pub zoom: f64,
    /// Bearing in degrees.
    pub bearing: f64,
    /// Pitch in degrees.
    pub pitch: f64,
    /// Viewport padding in physical pixels.
    pub padding: EdgeInsets,
}

impl CameraState {
    /// Returns the state with every field set in `options` replaced.
    pub fn merged(&self, options: &CameraOptions) -> Self {
        Self {
            center: options.center.unwrap_or(self.center),
            zoom: options.zoom.unwrap_or(self.zoom),
            bearing: options.bearing.unwrap_or(self.bearing),
            pitch: options.pitch.unwrap_or(self.pitch),
            padding: options.padding.unwrap_or(self.padding),
        }
    }

    /// Converts the state into the single precision position record.
    pub fn to_position(&self) -> CameraPosition {
        CameraPosition {
            zoom: self.zoom as f32,
            tilt: self.pitch as f32,
            bearing: self.bearing as f32,
            target: self.center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_only_replaces_set_fields() {
        let state = CameraState {
            center: LatLng::new(1.0, 2.0),
            zoom: 10.0,
            bearing: 45.0,
            pitch: 30.0,
            padding: EdgeInsets::uniform(4.0),
        };

        let merged = state.merged(&CameraOptions::zoom(12.0));

        assert_eq!(merged.zoom, 12.0);
        assert_eq!(merged.center, state.center);
        assert_eq!(merged.bearing, 45.0);
        assert_eq!(merged.pitch, 30.0);
        assert_eq!(merged.padding, state.padding);
    }

    #[test]
    fn position_converts_to_full_options() {
        let position = CameraPosition::new(17.5, 20.0, 90.0, LatLng::new(55.67, 12.56));
        let options = CameraOptions::from(position);

        assert_eq!(options.center, Some(LatLng::new(55.67, 12.56)));
        assert_eq!(options.zoom, Some(17.5));
        assert_eq!(options.bearing, Some(90.0));
        assert_eq!(options.pitch, Some(20.0));
        assert_eq!(options.padding, None);
    }
}
