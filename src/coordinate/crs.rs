//! Coordinate Reference System handling

use log::debug;

use super::definitions;
use super::lcc::LambertConformalConic;
use super::proj_string::ProjParams;
use super::transform::CoordinateTransformer;
use crate::geojson::errors::{GeoError, GeoResult};

/// A coordinate reference system this crate can transform
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateSystem {
    /// WGS 84 geographic, longitude/latitude in degrees (EPSG:4326)
    WGS84,
    /// Spherical Web Mercator in meters (EPSG:3857)
    WebMercator,
    /// A Lambert Conformal Conic projected system such as a State Plane zone
    LambertConformalConic {
        /// EPSG code when the system came from the registry
        epsg: Option<u32>,
        /// Display name
        name: String,
        /// Configured projection
        projection: LambertConformalConic,
    },
}

impl CoordinateSystem {
    /// Get the EPSG code for this coordinate system, if it has one
    pub fn epsg_code(&self) -> Option<u32> {
        match self {
            CoordinateSystem::WGS84 => Some(4326),
            CoordinateSystem::WebMercator => Some(3857),
            CoordinateSystem::LambertConformalConic { epsg, .. } => *epsg,
        }
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        match self {
            CoordinateSystem::WGS84 => "WGS 84 (EPSG:4326)".to_string(),
            CoordinateSystem::WebMercator => "Web Mercator (EPSG:3857)".to_string(),
            CoordinateSystem::LambertConformalConic { epsg: Some(code), name, .. } => {
                format!("{} (EPSG:{})", name, code)
            }
            CoordinateSystem::LambertConformalConic { name, .. } => name.clone(),
        }
    }

    /// Whether coordinates are longitude/latitude degrees
    pub fn is_geographic(&self) -> bool {
        matches!(self, CoordinateSystem::WGS84)
    }
}

/// Factory for creating coordinate systems
pub struct CoordinateSystemFactory;

impl CoordinateSystemFactory {
    /// Create a coordinate system from an EPSG code
    pub fn from_epsg(epsg: u32) -> GeoResult<CoordinateSystem> {
        Self::from_string(&format!("EPSG:{}", epsg))
    }

    /// Parse a coordinate system from a string
    ///
    /// Accepts `WGS84`, `EPSG:2229`, a bare code such as `2229`, or a PROJ
    /// parameter string starting with `+proj=`.
    pub fn from_string(crs_str: &str) -> GeoResult<CoordinateSystem> {
        let crs_str = crs_str.trim();

        if crs_str.starts_with('+') {
            return Self::from_proj_string(crs_str, None, None);
        }

        let definition = definitions::builtin()
            .lookup(crs_str)
            .ok_or_else(|| GeoError::UnknownCrs(crs_str.to_string()))?;

        let epsg = definition.code
            .strip_prefix("EPSG:")
            .and_then(|code| code.parse::<u32>().ok());

        debug!("Resolved CRS '{}' to {} ({})", crs_str, definition.code, definition.proj);
        Self::from_proj_string(&definition.proj, epsg, Some(&definition.name))
    }

    /// Build a coordinate system from a PROJ parameter string
    ///
    /// # Arguments
    /// * `definition` - The PROJ string
    /// * `epsg` - EPSG code to attach, if known
    /// * `name` - Display name to attach, if known
    pub fn from_proj_string(definition: &str, epsg: Option<u32>, name: Option<&str>) -> GeoResult<CoordinateSystem> {
        let params = ProjParams::parse(definition)?;
        params.check_datum()?;

        match params.projection()? {
            "longlat" | "latlong" | "lonlat" | "latlon" => Ok(CoordinateSystem::WGS84),
            "merc" => {
                require_web_mercator(&params)?;
                Ok(CoordinateSystem::WebMercator)
            }
            "lcc" => Ok(CoordinateSystem::LambertConformalConic {
                epsg,
                name: name.map(str::to_string).unwrap_or_else(|| definition.to_string()),
                projection: LambertConformalConic::from_params(&params)?,
            }),
            other => Err(GeoError::UnsupportedProjection(format!("+proj={}", other))),
        }
    }
}

/// Mercator is only supported with the exact EPSG:3857 parameter set
fn require_web_mercator(params: &ProjParams) -> GeoResult<()> {
    let ellipsoid = params.ellipsoid()?;
    if !ellipsoid.is_sphere() {
        return Err(GeoError::UnsupportedProjection("ellipsoidal Mercator".to_string()));
    }
    if ellipsoid.a != CoordinateTransformer::EARTH_RADIUS {
        return Err(GeoError::UnsupportedProjection(format!("Mercator on a sphere of radius {}", ellipsoid.a)));
    }

    for (key, expected) in [("lat_ts", 0.0), ("lon_0", 0.0), ("x_0", 0.0), ("y_0", 0.0), ("k_0", 1.0), ("k", 1.0)] {
        let value = params.get_f64_or(key, expected)?;
        if value != expected {
            return Err(GeoError::UnsupportedProjection(format!("Mercator with +{}={}", key, value)));
        }
    }
    if params.to_meter()? != 1.0 {
        return Err(GeoError::UnsupportedProjection("Mercator in units other than meters".to_string()));
    }
    Ok(())
}
