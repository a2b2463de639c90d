//! PROJ parameter string parsing
//!
//! Handles strings of the form `+proj=lcc +lat_1=35.46 ... +no_defs`.

use lazy_static::lazy_static;
use regex::Regex;

use super::ellipsoid::Ellipsoid;
use crate::geojson::errors::{GeoError, GeoResult};

lazy_static! {
    static ref PARAM_TOKEN: Regex =
        Regex::new(r"^\+([A-Za-z_][A-Za-z0-9_]*)(?:=(\S+))?$").expect("valid PROJ token pattern");
}

/// Meters per US survey foot
pub const US_SURVEY_FOOT: f64 = 0.3048006096012192;
/// Meters per international foot
pub const INTERNATIONAL_FOOT: f64 = 0.3048;

/// Parsed `+key=value` parameters in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct ProjParams {
    params: Vec<(String, Option<String>)>,
}

impl ProjParams {
    /// Parse a PROJ parameter string
    ///
    /// # Arguments
    /// * `definition` - Whitespace separated `+key=value` or `+flag` tokens
    ///
    /// # Returns
    /// The parsed parameters, or `InvalidProjection` for a stray token
    pub fn parse(definition: &str) -> GeoResult<Self> {
        let mut params = Vec::new();

        for token in definition.split_whitespace() {
            let caps = PARAM_TOKEN.captures(token).ok_or_else(|| {
                GeoError::InvalidProjection(format!("unexpected token '{}'", token))
            })?;
            let key = caps[1].to_string();
            let value = caps.get(2).map(|m| m.as_str().to_string());
            params.push((key, value));
        }

        if params.is_empty() {
            return Err(GeoError::InvalidProjection("empty definition".to_string()));
        }

        Ok(ProjParams { params })
    }

    /// Value of a `+key=value` parameter (last one wins)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.iter()
            .rev()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Whether the key is present at all, with or without a value
    pub fn has(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Numeric parameter, `None` when absent
    pub fn get_f64(&self, key: &str) -> GeoResult<Option<f64>> {
        match self.get(key) {
            Some(raw) => raw.parse::<f64>()
                .map(Some)
                .map_err(|_| GeoError::InvalidProjection(format!("+{}={} is not a number", key, raw))),
            None => Ok(None),
        }
    }

    /// Numeric parameter with a fallback
    pub fn get_f64_or(&self, key: &str, default: f64) -> GeoResult<f64> {
        Ok(self.get_f64(key)?.unwrap_or(default))
    }

    /// Numeric parameter that must be present
    pub fn require_f64(&self, key: &str) -> GeoResult<f64> {
        self.get_f64(key)?
            .ok_or_else(|| GeoError::InvalidProjection(format!("missing +{}", key)))
    }

    /// The `+proj` name
    pub fn projection(&self) -> GeoResult<&str> {
        self.get("proj")
            .ok_or_else(|| GeoError::InvalidProjection("missing +proj".to_string()))
    }

    /// Resolve the ellipsoid from `+a`/`+b`/`+rf`, `+ellps` or `+datum`
    pub fn ellipsoid(&self) -> GeoResult<Ellipsoid> {
        if let Some(a) = self.get_f64("a")? {
            if let Some(rf) = self.get_f64("rf")? {
                return Ok(Ellipsoid::from_inverse_flattening(a, rf));
            }
            let b = self.get_f64_or("b", a)?;
            return Ok(Ellipsoid::from_axes(a, b));
        }

        if let Some(name) = self.get("ellps") {
            return Ellipsoid::from_name(name);
        }

        match self.get("datum") {
            Some("NAD83") => Ok(Ellipsoid::GRS80),
            Some("WGS84") | None => Ok(Ellipsoid::WGS84),
            Some(other) => Err(GeoError::UnsupportedProjection(format!("datum '{}'", other))),
        }
    }

    /// Meters per projected unit from `+to_meter` or `+units`
    pub fn to_meter(&self) -> GeoResult<f64> {
        if let Some(scale) = self.get_f64("to_meter")? {
            if scale <= 0.0 {
                return Err(GeoError::InvalidProjection(format!("+to_meter={} must be positive", scale)));
            }
            return Ok(scale);
        }

        match self.get("units") {
            None | Some("m") => Ok(1.0),
            Some("km") => Ok(1000.0),
            Some("ft") => Ok(INTERNATIONAL_FOOT),
            Some("us-ft") => Ok(US_SURVEY_FOOT),
            Some(other) => Err(GeoError::UnsupportedProjection(format!("units '{}'", other))),
        }
    }

    /// Check that the datum coincides with WGS84
    ///
    /// NAD83 and WGS84 are taken as identical, which matches the null
    /// shift PROJ.4 style libraries apply between them.
    pub fn check_datum(&self) -> GeoResult<()> {
        match self.get("datum") {
            None | Some("WGS84") | Some("NAD83") => {}
            Some(other) => {
                return Err(GeoError::UnsupportedProjection(format!("datum '{}'", other)));
            }
        }

        if let Some(shift) = self.get("towgs84") {
            for term in shift.split(',') {
                let value = term.trim().parse::<f64>().map_err(|_| {
                    GeoError::InvalidProjection(format!("+towgs84={} is not a number list", shift))
                })?;
                if value != 0.0 {
                    return Err(GeoError::UnsupportedProjection(format!("datum shift +towgs84={}", shift)));
                }
            }
        }

        Ok(())
    }
}
