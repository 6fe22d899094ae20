//! Map configuration built from the cross-platform options dictionary.

use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

mod readable_map;

pub use readable_map::ReadableMap;

/// Dictionary keys understood by the configuration parser.
pub mod keys {
    /// Use the bundled map style. Defaults to `true`.
    pub const USE_DEFAULT_STYLE: &str = "useDefaultMapsIndoorsStyle";
    /// Label font family.
    pub const TYPEFACE: &str = "typeface";
    /// Label color, read together with [`TYPEFACE`].
    pub const COLOR: &str = "color";
    /// Label halo, read together with [`TYPEFACE`].
    pub const SHOW_HALO: &str = "showHalo";
    /// Label text size.
    pub const TEXT_SIZE: &str = "textSize";
    /// Floor selector visibility.
    pub const SHOW_FLOOR_SELECTOR: &str = "showFloorSelector";
    /// Info window on location click.
    pub const SHOW_INFO_WINDOW_ON_CLICK: &str = "showInfoWindowOnClick";
    /// User position visibility.
    pub const SHOW_USER_POSITION: &str = "showUserPosition";
    /// Tile fade in.
    pub const ENABLE_TILE_FADE_IN: &str = "enableTileFadeIn";
    /// Zoom level at which the indoor map takes over.
    pub const TRANSITION_LEVEL: &str = "mapsIndoorsTransitionLevel";
    /// Map marker visibility.
    pub const SHOW_MAP_MARKERS: &str = "showMapMarkers";
    /// Road label visibility.
    pub const SHOW_ROAD_LABELS: &str = "showRoadLabels";
}

// TODO: confirm with the bridge owners whether the `typeface` value should become the family
// name. The label font is currently always created from this literal.
const LABEL_FONT_FAMILY: &str = "typeface";

/// Style of a label typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypefaceStyle {
    /// Regular weight, upright.
    #[default]
    Normal,
}

/// Font used for map labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typeface {
    /// Family name.
    pub family: String,
    /// Style.
    pub style: TypefaceStyle,
}

impl Typeface {
    /// Creates a typeface.
    pub fn new(family: impl Into<String>, style: TypefaceStyle) -> Self {
        Self {
            family: family.into(),
            style,
        }
    }
}

/// Label font together with its color and halo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFont {
    /// Font.
    pub typeface: Typeface,
    /// Color string, as given by the caller.
    pub color: String,
    /// Draw a halo around labels.
    pub show_halo: bool,
}

/// Finalized map configuration.
///
/// Every optional field is `None` unless its setter was called, in which case the SDK keeps its
/// own default for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapConfig {
    /// SDK API key.
    pub api_key: String,
    /// Use the bundled map style.
    pub use_default_style: bool,
    /// Label font.
    pub label_font: Option<LabelFont>,
    /// Label text size.
    pub label_text_size: Option<i32>,
    /// Floor selector visibility.
    pub show_floor_selector: Option<bool>,
    /// Info window when a location is clicked.
    pub show_info_window_on_click: Option<bool>,
    /// User position visibility.
    pub show_user_position: Option<bool>,
    /// Tile fade in.
    pub tile_fade_in_enabled: Option<bool>,
    /// Indoor transition zoom level.
    pub transition_level: Option<i32>,
    /// Map marker visibility.
    pub show_map_markers: Option<bool>,
    /// Road label visibility.
    pub show_road_labels: Option<bool>,
}

impl MapConfig {
    /// Number of optional settings that were set explicitly.
    pub fn explicit_settings(&self) -> usize {
        [
            self.label_font.is_some(),
            self.label_text_size.is_some(),
            self.show_floor_selector.is_some(),
            self.show_info_window_on_click.is_some(),
            self.show_user_position.is_some(),
            self.tile_fade_in_enabled.is_some(),
            self.transition_level.is_some(),
            self.show_map_markers.is_some(),
            self.show_road_labels.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

/// Collects configuration setters before producing a [`MapConfig`].
#[derive(Debug, Clone)]
pub struct MapConfigBuilder {
    config: MapConfig,
}

impl MapConfigBuilder {
    /// Starts a configuration for the given API key.
    pub fn new(api_key: impl Into<String>, use_default_style: bool) -> Self {
        Self {
            config: MapConfig {
                api_key: api_key.into(),
                use_default_style,
                ..Default::default()
            },
        }
    }

    /// Sets the label font.
    pub fn set_map_label_font(
        &mut self,
        typeface: Typeface,
        color: impl Into<String>,
        show_halo: bool,
    ) -> &mut Self {
        self.config.label_font = Some(LabelFont {
            typeface,
            color: color.into(),
            show_halo,
        });
        self
    }

    /// Sets the label text size.
    pub fn set_map_label_text_size(&mut self, size: i32) -> &mut Self {
        self.config.label_text_size = Some(size);
        self
    }

    /// Shows or hides the floor selector.
    pub fn set_show_floor_selector(&mut self, show: bool) -> &mut Self {
        self.config.show_floor_selector = Some(show);
        self
    }

    /// Shows or hides the info window when a location is clicked.
    pub fn set_show_info_window_on_location_clicked(&mut self, show: bool) -> &mut Self {
        self.config.show_info_window_on_click = Some(show);
        self
    }

    /// Shows or hides the user position.
    pub fn set_show_user_position(&mut self, show: bool) -> &mut Self {
        self.config.show_user_position = Some(show);
        self
    }

    /// Enables or disables tile fade in.
    pub fn set_tile_fade_in_enabled(&mut self, enabled: bool) -> &mut Self {
        self.config.tile_fade_in_enabled = Some(enabled);
        self
    }

    /// Sets the zoom level at which the indoor map takes over.
    pub fn set_transition_level(&mut self, level: i32) -> &mut Self {
        self.config.transition_level = Some(level);
        self
    }

    /// Shows or hides map markers.
    pub fn show_map_markers(&mut self, show: bool) -> &mut Self {
        self.config.show_map_markers = Some(show);
        self
    }

    /// Shows or hides road labels.
    pub fn show_road_labels(&mut self, show: bool) -> &mut Self {
        self.config.show_road_labels = Some(show);
        self
    }

    /// Finishes the configuration.
    pub fn build(self) -> MapConfig {
        self.config
    }
}

/// Reads the `useDefaultMapsIndoorsStyle` flag, `true` unless explicitly set.
pub fn use_default_style(options: &ReadableMap) -> Result<bool, AdapterError> {
    if options.has_key(keys::USE_DEFAULT_STYLE) {
        options.get_bool(keys::USE_DEFAULT_STYLE)
    } else {
        Ok(true)
    }
}

/// Calls the builder setter of every key present in `options`. Absent keys are skipped.
pub fn apply_options(
    builder: &mut MapConfigBuilder,
    options: &ReadableMap,
) -> Result<(), AdapterError> {
    if options.has_key(keys::TYPEFACE) {
        builder.set_map_label_font(
            Typeface::new(LABEL_FONT_FAMILY, TypefaceStyle::Normal),
            options.get_string(keys::COLOR)?,
            options.get_bool(keys::SHOW_HALO)?,
        );
    }

    if options.has_key(keys::TEXT_SIZE) {
        builder.set_map_label_text_size(options.get_int(keys::TEXT_SIZE)?);
    }

    if options.has_key(keys::SHOW_FLOOR_SELECTOR) {
        builder.set_show_floor_selector(options.get_bool(keys::SHOW_FLOOR_SELECTOR)?);
    }

    if options.has_key(keys::SHOW_INFO_WINDOW_ON_CLICK) {
        builder.set_show_info_window_on_location_clicked(
            options.get_bool(keys::SHOW_INFO_WINDOW_ON_CLICK)?,
        );
    }

    if options.has_key(keys::SHOW_USER_POSITION) {
        builder.set_show_user_position(options.get_bool(keys::SHOW_USER_POSITION)?);
    }

    if options.has_key(keys::ENABLE_TILE_FADE_IN) {
        builder.set_tile_fade_in_enabled(options.get_bool(keys::ENABLE_TILE_FADE_IN)?);
    }

    if options.has_key(keys::TRANSITION_LEVEL) {
        builder.set_transition_level(options.get_int(keys::TRANSITION_LEVEL)?);
    }

    if options.has_key(keys::SHOW_MAP_MARKERS) {
        builder.show_map_markers(options.get_bool(keys::SHOW_MAP_MARKERS)?);
    }

    if options.has_key(keys::SHOW_ROAD_LABELS) {
        builder.show_road_labels(options.get_bool(keys::SHOW_ROAD_LABELS)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(options: &ReadableMap) -> Result<MapConfig, AdapterError> {
        let mut builder = MapConfigBuilder::new("key", use_default_style(options)?);
        apply_options(&mut builder, options)?;
        Ok(builder.build())
    }

    #[test]
    fn empty_options_keep_sdk_defaults() {
        let config = parse(&ReadableMap::new()).expect("valid config");

        assert!(config.use_default_style);
        assert_eq!(config.explicit_settings(), 0);
        assert_eq!(
            config,
            MapConfig {
                api_key: "key".into(),
                use_default_style: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn default_style_can_be_disabled() {
        let options = ReadableMap::new().with(keys::USE_DEFAULT_STYLE, false);
        let config = parse(&options).expect("valid config");

        assert!(!config.use_default_style);
        assert_eq!(config.explicit_settings(), 0);
    }

    #[test]
    fn single_key_calls_single_setter() {
        let options = ReadableMap::new().with(keys::SHOW_FLOOR_SELECTOR, false);
        let config = parse(&options).expect("valid config");

        assert_eq!(config.explicit_settings(), 1);
        assert_eq!(config.show_floor_selector, Some(false));
    }

    #[test]
    fn all_keys_are_applied() {
        let options = ReadableMap::new()
            .with(keys::TYPEFACE, "Roboto")
            .with(keys::COLOR, "#FF0000")
            .with(keys::SHOW_HALO, true)
            .with(keys::TEXT_SIZE, 14)
            .with(keys::SHOW_FLOOR_SELECTOR, true)
            .with(keys::SHOW_INFO_WINDOW_ON_CLICK, false)
            .with(keys::SHOW_USER_POSITION, true)
            .with(keys::ENABLE_TILE_FADE_IN, false)
            .with(keys::TRANSITION_LEVEL, 17)
            .with(keys::SHOW_MAP_MARKERS, true)
            .with(keys::SHOW_ROAD_LABELS, false);

        let config = parse(&options).expect("valid config");

        assert_eq!(config.explicit_settings(), 9);
        assert_eq!(config.label_text_size, Some(14));
        assert_eq!(config.show_info_window_on_click, Some(false));
        assert_eq!(config.show_user_position, Some(true));
        assert_eq!(config.tile_fade_in_enabled, Some(false));
        assert_eq!(config.transition_level, Some(17));
        assert_eq!(config.show_map_markers, Some(true));
        assert_eq!(config.show_road_labels, Some(false));
    }

    #[test]
    fn label_font_uses_literal_family() {
        let options = ReadableMap::new()
            .with(keys::TYPEFACE, "Roboto")
            .with(keys::COLOR, "#112233")
            .with(keys::SHOW_HALO, false);

        let config = parse(&options).expect("valid config");

        assert_eq!(
            config.label_font,
            Some(LabelFont {
                typeface: Typeface::new("typeface", TypefaceStyle::Normal),
                color: "#112233".into(),
                show_halo: false,
            })
        );
    }

    #[test]
    fn label_font_requires_color_and_halo() {
        let options = ReadableMap::new().with(keys::TYPEFACE, "Roboto");
        assert_eq!(
            parse(&options),
            Err(AdapterError::MissingKey(keys::COLOR.into()))
        );
    }

    #[test]
    fn mistyped_value_fails_at_read() {
        let options = ReadableMap::new().with(keys::TEXT_SIZE, "large");
        assert!(matches!(
            parse(&options),
            Err(AdapterError::TypeMismatch { .. })
        ));
    }
}
