//! Types shared between Dart and Rust for the MapsIndoors Flutter bridge.
//! All types here are used by flutter_rust_bridge_codegen.

use std::collections::HashMap;

use mapsindoors_camera::{CameraPosition, LatLng, MapConfig, ViewportSize};

/// Physical size of the map in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSize {
    pub width: u32,
    pub height: u32,
}

impl MapSize {
    pub fn as_viewport(&self) -> ViewportSize {
        ViewportSize::new(self.width, self.height)
    }
}

/// Configuration of the loop advancing camera animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Ticks per second (default: 60)
    pub fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { fps: 60 }
    }
}

/// Everything needed to create a map view session.
#[derive(Debug, Clone, PartialEq)]
pub struct MapInitConfig {
    pub map_size: MapSize,
    /// Physical pixels per logical pixel of the hosting screen
    pub density: f32,
    /// JSON encoded camera position applied after creation
    pub camera: Option<String>,
    pub show_compass: bool,
    /// Style URI of the base map
    pub map_style: Option<String>,
    /// String resources of the host app, the API key among them
    pub resources: HashMap<String, String>,
    pub animation: AnimationConfig,
}

impl MapInitConfig {
    pub fn new(map_size: MapSize, density: f32) -> Self {
        Self {
            map_size,
            density,
            camera: None,
            show_compass: true,
            map_style: None,
            resources: HashMap::new(),
            animation: AnimationConfig::default(),
        }
    }
}

/// Camera position as seen from Dart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DartCameraPosition {
    pub zoom: f32,
    pub tilt: f32,
    pub bearing: f32,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<CameraPosition> for DartCameraPosition {
    fn from(position: CameraPosition) -> Self {
        Self {
            zoom: position.zoom,
            tilt: position.tilt,
            bearing: position.bearing,
            latitude: position.target.latitude,
            longitude: position.target.longitude,
        }
    }
}

impl From<DartCameraPosition> for CameraPosition {
    fn from(position: DartCameraPosition) -> Self {
        CameraPosition::new(
            position.zoom,
            position.tilt,
            position.bearing,
            LatLng::new(position.latitude, position.longitude),
        )
    }
}

/// Map configuration handed back to Dart. `None` fields keep the SDK default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DartMapConfig {
    pub api_key: String,
    pub use_default_style: bool,
    pub label_font_family: Option<String>,
    pub label_color: Option<String>,
    pub label_show_halo: Option<bool>,
    pub label_text_size: Option<i32>,
    pub show_floor_selector: Option<bool>,
    pub show_info_window_on_click: Option<bool>,
    pub show_user_position: Option<bool>,
    pub tile_fade_in_enabled: Option<bool>,
    pub transition_level: Option<i32>,
    pub show_map_markers: Option<bool>,
    pub show_road_labels: Option<bool>,
}

impl From<MapConfig> for DartMapConfig {
    fn from(config: MapConfig) -> Self {
        let (label_font_family, label_color, label_show_halo) = match config.label_font {
            Some(font) => (
                Some(font.typeface.family),
                Some(font.color),
                Some(font.show_halo),
            ),
            None => (None, None, None),
        };

        Self {
            api_key: config.api_key,
            use_default_style: config.use_default_style,
            label_font_family,
            label_color,
            label_show_halo,
            label_text_size: config.label_text_size,
            show_floor_selector: config.show_floor_selector,
            show_info_window_on_click: config.show_info_window_on_click,
            show_user_position: config.show_user_position,
            tile_fade_in_enabled: config.tile_fade_in_enabled,
            transition_level: config.transition_level,
            show_map_markers: config.show_map_markers,
            show_road_labels: config.show_road_labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use mapsindoors_camera::{LabelFont, Typeface, TypefaceStyle};

    use super::*;

    #[test]
    fn camera_position_converts_both_ways() {
        let position = CameraPosition::new(17.5, 0.0, 90.0, LatLng::new(55.67, 12.56));
        let dart = DartCameraPosition::from(position);

        assert_eq!(dart.latitude, 55.67);
        assert_eq!(dart.longitude, 12.56);
        assert_eq!(CameraPosition::from(dart), position);
    }

    #[test]
    fn map_config_flattens_label_font() {
        let config = MapConfig {
            api_key: "key".into(),
            use_default_style: true,
            label_font: Some(LabelFont {
                typeface: Typeface::new("typeface", TypefaceStyle::Normal),
                color: "#000000".into(),
                show_halo: true,
            }),
            ..Default::default()
        };

        let dart = DartMapConfig::from(config);

        assert_eq!(dart.label_font_family.as_deref(), Some("typeface"));
        assert_eq!(dart.label_color.as_deref(), Some("#000000"));
        assert_eq!(dart.label_show_halo, Some(true));
        assert_eq!(dart.show_floor_selector, None);
    }
}
