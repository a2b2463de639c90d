//! Conversion settings

use std::fs;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geojson::errors::{GeoError, GeoResult};

/// Default source CRS: NAD83 / California zone 5, US survey feet
pub const DEFAULT_SOURCE_CRS: &str = "EPSG:2229";
/// Default target CRS
pub const DEFAULT_TARGET_CRS: &str = "WGS84";

/// What a batch does when one record fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchPolicy {
    /// Record the failure and continue with the next record
    #[default]
    Skip,
    /// Stop at the first failure
    Abort,
}

impl FromStr for BatchPolicy {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(BatchPolicy::Skip),
            "abort" => Ok(BatchPolicy::Abort),
            other => Err(GeoError::ConfigError(format!("Unknown batch policy '{}' (expected skip or abort)", other))),
        }
    }
}

/// Settings for a conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// CRS of incoming parcel coordinates
    pub source_crs: String,
    /// CRS of the produced GeoJSON
    pub target_crs: String,
    /// Per-record failure handling
    pub policy: BatchPolicy,
    /// Draw a progress bar while converting
    pub show_progress: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            source_crs: DEFAULT_SOURCE_CRS.to_string(),
            target_crs: DEFAULT_TARGET_CRS.to_string(),
            policy: BatchPolicy::Skip,
            show_progress: false,
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    conversion: ConversionConfig,
}

impl ConversionConfig {
    /// Parse the `[conversion]` table of a TOML document
    ///
    /// Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> GeoResult<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| GeoError::ConfigError(format!("Failed to parse config: {}", e)))?;
        Ok(file.conversion)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
