//! Environmental readings entered on the prediction form.

use crate::error::{FormError, Result};
use crate::location::LatLng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One input on the prediction form.
///
/// The six measurement fields are required; latitude and longitude are
/// read-only and filled from device geolocation when it is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingField {
    Rainfall,
    Temperature,
    Humidity,
    RiverDischarge,
    WaterLevel,
    Elevation,
    Latitude,
    Longitude,
}

impl ReadingField {
    /// Form order.
    pub const ALL: [ReadingField; 8] = [
        ReadingField::Rainfall,
        ReadingField::Temperature,
        ReadingField::Humidity,
        ReadingField::RiverDischarge,
        ReadingField::WaterLevel,
        ReadingField::Elevation,
        ReadingField::Latitude,
        ReadingField::Longitude,
    ];

    /// Input `name` attribute.
    pub fn key(&self) -> &'static str {
        match self {
            ReadingField::Rainfall => "rainfall",
            ReadingField::Temperature => "temperature",
            ReadingField::Humidity => "humidity",
            ReadingField::RiverDischarge => "river_discharge",
            ReadingField::WaterLevel => "water_level",
            ReadingField::Elevation => "elevation",
            ReadingField::Latitude => "latitude",
            ReadingField::Longitude => "longitude",
        }
    }

    /// Title-cased key: "river_discharge" becomes "River Discharge".
    pub fn label(&self) -> String {
        title_case(self.key())
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ReadingField::Rainfall => "mm",
            ReadingField::Temperature => "°C",
            ReadingField::Humidity => "%",
            ReadingField::RiverDischarge => "m³/s",
            ReadingField::WaterLevel => "m",
            ReadingField::Elevation => "m",
            ReadingField::Latitude | ReadingField::Longitude => "°",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ReadingField::Latitude | ReadingField::Longitude)
    }

    /// Latitude and longitude are rendered disabled.
    pub fn is_editable(&self) -> bool {
        self.is_required()
    }
}

impl fmt::Display for ReadingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse the text of a numeric input. Surrounding whitespace is ignored;
/// non-finite values are rejected.
pub fn parse_value(field: ReadingField, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FormError::InvalidNumber {
            field,
            value: text.to_string(),
        }),
    }
}

/// A validated set of readings. Values are never range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub rainfall: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub river_discharge: f64,
    pub water_level: f64,
    pub elevation: f64,
    pub location: Option<LatLng>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_title_cased_keys() {
        assert_eq!(ReadingField::Rainfall.label(), "Rainfall");
        assert_eq!(ReadingField::RiverDischarge.label(), "River Discharge");
        assert_eq!(ReadingField::WaterLevel.label(), "Water Level");
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = ReadingField::ALL.iter().map(|f| f.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ReadingField::ALL.len());
    }

    #[test]
    fn eight_fields_six_required() {
        assert_eq!(ReadingField::ALL.len(), 8);
        let required = ReadingField::ALL.iter().filter(|f| f.is_required()).count();
        assert_eq!(required, 6);
        assert!(!ReadingField::Latitude.is_editable());
        assert!(!ReadingField::Longitude.is_editable());
    }

    #[test]
    fn parse_value_accepts_decimals_and_whitespace() {
        assert_eq!(parse_value(ReadingField::WaterLevel, " 3.2 ").unwrap(), 3.2);
        assert_eq!(parse_value(ReadingField::Temperature, "-4").unwrap(), -4.0);
    }

    #[test]
    fn parse_value_rejects_empty_and_garbage() {
        assert_eq!(
            parse_value(ReadingField::Rainfall, "  "),
            Err(FormError::MissingField(ReadingField::Rainfall))
        );
        assert_eq!(
            parse_value(ReadingField::Humidity, "wet"),
            Err(FormError::InvalidNumber {
                field: ReadingField::Humidity,
                value: "wet".to_string()
            })
        );
        assert!(parse_value(ReadingField::Humidity, "NaN").is_err());
        assert!(parse_value(ReadingField::Humidity, "inf").is_err());
    }

    #[test]
    fn error_messages_use_labels() {
        let err = FormError::MissingField(ReadingField::RiverDischarge);
        assert_eq!(err.to_string(), "River Discharge is required");
    }
}
