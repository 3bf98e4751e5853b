//! Application configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! The app embeds its JSON at compile time and parses it with
//! [`FloodGuardConfig::from_json`].

use crate::error::ConfigError;
use crate::location::{Bounds, LatLng};
use crate::style::UserMarkerStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FloodGuardConfig {
    /// Key passed to the Google Maps bootstrap loader. Empty loads the
    /// library in development mode.
    pub google_maps_api_key: String,
    pub map: MapConfig,
    pub overlay: OverlayConfig,
    pub prediction: PredictionConfig,
    pub user_marker: UserMarkerStyle,
}

/// Initial map view and controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: u8,
    pub map_type_control: bool,
    pub fullscreen_control: bool,
    pub street_view_control: bool,
    pub styles: Vec<MapStyleRule>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(40.7128, -74.006),
            zoom: 12,
            map_type_control: false,
            fullscreen_control: true,
            street_view_control: false,
            styles: vec![
                MapStyleRule::new("water", "geometry"),
                MapStyleRule::new("landscape", "geometry"),
            ],
        }
    }
}

/// One entry of the map provider's style array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStyleRule {
    pub feature_type: String,
    pub element_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stylers: Vec<serde_json::Value>,
}

impl MapStyleRule {
    pub fn new(feature_type: &str, element_type: &str) -> Self {
        Self {
            feature_type: feature_type.to_string(),
            element_type: element_type.to_string(),
            stylers: Vec::new(),
        }
    }
}

/// Static flood-extent image laid over the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub image_url: String,
    pub bounds: Bounds,
    pub opacity: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            image_url: "https://example.com/flood-overlay.png".to_string(),
            bounds: Bounds {
                north: 40.7828,
                south: 40.6428,
                east: -73.906,
                west: -74.106,
            },
            opacity: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Simulated service latency.
    pub delay_ms: u32,
    pub high_risk_probability: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            high_risk_probability: 0.5,
        }
    }
}

impl FloodGuardConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FloodGuardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.zoom > 22 {
            return Err(invalid("map.zoom", format!("{} is above 22", self.map.zoom)));
        }
        let c = self.map.center;
        if !(-90.0..=90.0).contains(&c.lat) || !(-180.0..=180.0).contains(&c.lng) {
            return Err(invalid("map.center", format!("{:?} is not a coordinate", c)));
        }
        let b = self.overlay.bounds;
        if b.north < b.south || b.east < b.west {
            return Err(invalid("overlay.bounds", format!("{:?} is inverted", b)));
        }
        if !(0.0..=1.0).contains(&self.overlay.opacity) {
            return Err(invalid(
                "overlay.opacity",
                format!("{} is outside 0..=1", self.overlay.opacity),
            ));
        }
        if !(0.0..=1.0).contains(&self.prediction.high_risk_probability) {
            return Err(invalid(
                "prediction.high_risk_probability",
                format!("{} is outside 0..=1", self.prediction.high_risk_probability),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidValue { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = FloodGuardConfig::from_json("{}").unwrap();
        assert_eq!(config, FloodGuardConfig::default());
        assert_eq!(config.map.center, LatLng::new(40.7128, -74.006));
        assert_eq!(config.map.zoom, 12);
        assert_eq!(config.prediction.delay_ms, 1500);
        assert_eq!(config.overlay.opacity, 0.5);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = FloodGuardConfig::from_json(
            r#"{ "map": { "zoom": 9 }, "prediction": { "delay_ms": 10 } }"#,
        )
        .unwrap();
        assert_eq!(config.map.zoom, 9);
        assert!(config.map.fullscreen_control);
        assert_eq!(config.prediction.delay_ms, 10);
        assert_eq!(config.prediction.high_risk_probability, 0.5);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = FloodGuardConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = FloodGuardConfig::from_json(
            r#"{ "overlay": { "bounds": { "north": 1.0, "south": 2.0, "east": 0.0, "west": 0.0 } } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("overlay.bounds"));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(FloodGuardConfig::from_json(r#"{ "overlay": { "opacity": 1.5 } }"#).is_err());
        assert!(FloodGuardConfig::from_json(r#"{ "map": { "zoom": 30 } }"#).is_err());
        assert!(FloodGuardConfig::from_json(
            r#"{ "prediction": { "high_risk_probability": -0.1 } }"#
        )
        .is_err());
    }

    #[test]
    fn map_config_serializes_camel_case() {
        let json = serde_json::to_value(MapConfig::default()).unwrap();
        assert_eq!(json["mapTypeControl"], false);
        assert_eq!(json["streetViewControl"], false);
        assert_eq!(json["styles"][0]["featureType"], "water");
    }
}
