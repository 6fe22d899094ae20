use serde::{Deserialize, Serialize};

use crate::camera::{CameraPosition, CameraUpdate};
use crate::error::AdapterError;
use crate::geo::{LatLng, LatLngBounds};

pub(super) const FROM_POINT: &str = "fromPoint";
pub(super) const FROM_BOUNDS: &str = "fromBounds";
pub(super) const ZOOM_BY: &str = "zoomBy";
pub(super) const ZOOM_TO: &str = "zoomTo";
pub(super) const FROM_CAMERA_POSITION: &str = "fromCameraPosition";

/// Camera update as it arrives from the cross-platform side.
///
/// Only the field matching `mode` is read. A payload without `mode` converts into `None`, which
/// the adapter forwards to the SDK unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraUpdatePayload {
    /// Update mode.
    #[serde(default)]
    pub mode: Option<String>,
    /// Point for `fromPoint`.
    #[serde(default)]
    pub point: Option<LatLng>,
    /// Bounds for `fromBounds`.
    #[serde(default)]
    pub bounds: Option<LatLngBounds>,
    /// Padding for `fromBounds`, logical pixels.
    #[serde(default)]
    pub padding: Option<i32>,
    /// Zoom for `zoomBy` and `zoomTo`.
    #[serde(default)]
    pub zoom: Option<f32>,
    /// Position for `fromCameraPosition`.
    #[serde(default)]
    pub position: Option<CameraPosition>,
}

impl CameraUpdatePayload {
    /// Parses the payload from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, AdapterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts the payload into a typed update. `Ok(None)` means the mode is unset.
    pub fn into_update(self) -> Result<Option<CameraUpdate>, AdapterError> {
        let Some(mode) = self.mode else {
            return Ok(None);
        };

        let update = match mode.as_str() {
            FROM_POINT => CameraUpdate::FromPoint(required(FROM_POINT, "point", self.point)?),
            FROM_BOUNDS => CameraUpdate::FromBounds {
                bounds: required(FROM_BOUNDS, "bounds", self.bounds)?,
                padding: self.padding.unwrap_or_default(),
            },
            ZOOM_BY => CameraUpdate::ZoomBy(required(ZOOM_BY, "zoom", self.zoom)?),
            ZOOM_TO => CameraUpdate::ZoomTo(required(ZOOM_TO, "zoom", self.zoom)?),
            FROM_CAMERA_POSITION => CameraUpdate::FromCameraPosition(required(
                FROM_CAMERA_POSITION,
                "position",
                self.position,
            )?),
            _ => return Err(AdapterError::UnknownCameraMode(mode)),
        };

        Ok(Some(update))
    }
}

impl From<&CameraUpdate> for CameraUpdatePayload {
    fn from(update: &CameraUpdate) -> Self {
        let mut payload = Self {
            mode: Some(update.mode_name().to_string()),
            ..Default::default()
        };

        match *update {
            CameraUpdate::FromPoint(point) => payload.point = Some(point),
            CameraUpdate::FromBounds { bounds, padding } => {
                payload.bounds = Some(bounds);
                payload.padding = Some(padding);
            }
            CameraUpdate::ZoomBy(zoom) | CameraUpdate::ZoomTo(zoom) => payload.zoom = Some(zoom),
            CameraUpdate::FromCameraPosition(position) => payload.position = Some(position),
        }

        payload
    }
}

fn required<T>(
    mode: &'static str,
    field: &'static str,
    value: Option<T>,
) -> Result<T, AdapterError> {
    value.ok_or(AdapterError::MissingField { mode, field })
}
