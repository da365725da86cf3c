// Console configuration, loaded from JSON.
//
// Every field has a default, so an empty object `{}` (or no file at all)
// gives a working setup for the stock six-ring device: HC-SR04 range
// limits, 30 samples per position, 100 ms between samples, and the
// calibration file next to the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CalibResult;

/// Tunables for decoding and surveying the rings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingsConfig {
    /// Verb root the suffix rings attach to.
    pub root: String,
    /// Where the two-column calibration file lives.
    pub calibration_path: PathBuf,
    /// Readings at or below this (cm) are treated as no echo.
    pub min_distance_cm: f32,
    /// Readings at or above this (cm) are treated as no echo.
    pub max_distance_cm: f32,
    /// Samples taken at each ring position while surveying.
    pub points_per_position: usize,
    /// Pause between survey samples, in milliseconds.
    pub sample_interval_ms: u64,
}

impl Default for RingsConfig {
    fn default() -> Self {
        RingsConfig {
            root: "wayk'u".to_string(),
            calibration_path: PathBuf::from("ring_data.txt"),
            min_distance_cm: 2.0,
            max_distance_cm: 400.0,
            points_per_position: 30,
            sample_interval_ms: 100,
        }
    }
}

impl RingsConfig {
    pub fn from_json(json: &str) -> CalibResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> CalibResult<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Whether a reading falls strictly inside the sensor's usable range.
    pub fn in_range(&self, distance_cm: f32) -> bool {
        self.min_distance_cm < distance_cm && distance_cm < self.max_distance_cm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(RingsConfig::from_json("{}").unwrap(), RingsConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = RingsConfig::from_json(r#"{"root": "awa", "points_per_position": 5}"#).unwrap();
        assert_eq!(config.root, "awa");
        assert_eq!(config.points_per_position, 5);
        assert_eq!(config.max_distance_cm, 400.0);
    }

    #[test]
    fn range_is_exclusive() {
        let config = RingsConfig::default();
        assert!(!config.in_range(2.0));
        assert!(config.in_range(2.01));
        assert!(config.in_range(399.9));
        assert!(!config.in_range(400.0));
        assert!(!config.in_range(-1.0));
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(RingsConfig::from_json(r#"{"points_per_position": "many"}"#).is_err());
    }
}
