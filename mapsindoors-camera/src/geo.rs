//! Geographic value types and the Web Mercator grid used for bounds fitting.

use galileo_types::cartesian::{CartesianPoint2d, Point2};
use galileo_types::geo::impls::GeoPoint2d;
use galileo_types::geo::{Crs, GeoPoint, NewGeoPoint, Projection};
use serde::{Deserialize, Serialize};

/// Half of the EPSG:3857 world extent in meters.
const WORLD_HALF_EXTENT: f64 = 20_037_508.342_787;

/// Geographic point in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl LatLng {
    /// Creates a new point.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<LatLng> for GeoPoint2d {
    fn from(point: LatLng) -> Self {
        GeoPoint2d::latlon(point.latitude, point.longitude)
    }
}

impl From<GeoPoint2d> for LatLng {
    fn from(point: GeoPoint2d) -> Self {
        LatLng::new(point.lat(), point.lon())
    }
}

/// Web Mercator (EPSG:3857) projection normalized to the unit square.
///
/// The whole world maps to `[0, 1] x [0, 1]`, `x` growing east and `y` growing south, which is
/// the tile pixel space at zoom 0 divided by the tile size.
pub struct MercatorGrid {
    projection: Box<dyn Projection<InPoint = GeoPoint2d, OutPoint = Point2>>,
}

impl MercatorGrid {
    /// Creates the grid. Returns `None` if the projection is not available.
    pub fn new() -> Option<Self> {
        Crs::EPSG3857
            .get_projection::<GeoPoint2d, Point2>()
            .map(|projection| Self { projection })
    }

    /// Projects a point into the grid. Points beyond the Mercator latitude limit are clamped
    /// to the grid edge.
    pub fn project(&self, point: LatLng) -> Option<(f64, f64)> {
        let projected = self.projection.project(&point.into())?;
        let x = (projected.x() + WORLD_HALF_EXTENT) / (2.0 * WORLD_HALF_EXTENT);
        let y = (WORLD_HALF_EXTENT - projected.y()) / (2.0 * WORLD_HALF_EXTENT);
        if x.is_nan() || y.is_nan() {
            return None;
        }

        Some((x.clamp(0.0, 1.0), y.clamp(0.0, 1.0)))
    }

    /// Inverse of [`MercatorGrid::project`].
    pub fn unproject(&self, x: f64, y: f64) -> Option<LatLng> {
        let projected = Point2::new(
            x * 2.0 * WORLD_HALF_EXTENT - WORLD_HALF_EXTENT,
            WORLD_HALF_EXTENT - y * 2.0 * WORLD_HALF_EXTENT,
        );
        self.projection.unproject(&projected).map(LatLng::from)
    }
}

/// Rectangular region given by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLngBounds {
    /// South-west corner.
    pub south_west: LatLng,
    /// North-east corner.
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Creates bounds from two corners.
    pub const fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }
}

/// Insets from the edges of the map viewport, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Top inset.
    pub top: f64,
    /// Left inset.
    pub left: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Right inset.
    pub right: f64,
}

impl EdgeInsets {
    /// Creates insets.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on all four edges.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of the left and right insets.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}
