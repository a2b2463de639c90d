//! Coordinate transformation functionality

use std::f64::consts::PI;

use super::crs::CoordinateSystem;
use super::point::Point;
use crate::geojson::errors::{GeoError, GeoResult};

/// Transformer from one fixed coordinate system to another
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateTransformer {
    source: CoordinateSystem,
    target: CoordinateSystem,
}

impl CoordinateTransformer {
    /// Earth radius in meters
    pub(crate) const EARTH_RADIUS: f64 = 6378137.0;

    /// Create a transformer for a source/target pair
    pub fn new(source: CoordinateSystem, target: CoordinateSystem) -> Self {
        CoordinateTransformer { source, target }
    }

    pub fn source(&self) -> &CoordinateSystem {
        &self.source
    }

    pub fn target(&self) -> &CoordinateSystem {
        &self.target
    }

    /// The transformer running the opposite direction
    pub fn inverse(&self) -> Self {
        CoordinateTransformer::new(self.target.clone(), self.source.clone())
    }

    /// Convert from WGS84 (EPSG:4326) to Web Mercator (EPSG:3857)
    pub fn wgs84_to_web_mercator(lon: f64, lat: f64) -> (f64, f64) {
        // Web Mercator is undefined at the poles
        let lat = lat.max(-85.06).min(85.06);

        let x = lon * Self::EARTH_RADIUS * PI / 180.0;
        let y = f64::ln(f64::tan((90.0 + lat) * PI / 360.0)) * Self::EARTH_RADIUS;

        (x, y)
    }

    /// Convert from Web Mercator (EPSG:3857) to WGS84 (EPSG:4326)
    pub fn web_mercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
        let lon = x * 180.0 / (Self::EARTH_RADIUS * PI);
        let lat = 180.0 / PI * (2.0 * f64::atan(f64::exp(y / Self::EARTH_RADIUS)) - PI / 2.0);

        (lon, lat)
    }

    /// Convert a point in `crs` to WGS84 longitude/latitude
    fn to_geographic(crs: &CoordinateSystem, point: &Point) -> GeoResult<Point> {
        let (lon, lat) = match crs {
            CoordinateSystem::WGS84 => (point.x, point.y),
            CoordinateSystem::WebMercator => Self::web_mercator_to_wgs84(point.x, point.y),
            CoordinateSystem::LambertConformalConic { projection, .. } => {
                projection.inverse(point.x, point.y)?
            }
        };
        Ok(point.with_xy(lon, lat))
    }

    /// Convert a WGS84 longitude/latitude point into `crs`
    fn from_geographic(crs: &CoordinateSystem, point: &Point) -> GeoResult<Point> {
        let (x, y) = match crs {
            CoordinateSystem::WGS84 => (point.x, point.y),
            CoordinateSystem::WebMercator => Self::wgs84_to_web_mercator(point.x, point.y),
            CoordinateSystem::LambertConformalConic { projection, .. } => {
                projection.forward(point.x, point.y)?
            }
        };
        Ok(point.with_xy(x, y))
    }

    /// Transform a point from the source to the target system
    ///
    /// The Z value, if any, is carried through untouched.
    pub fn transform_point(&self, point: &Point) -> GeoResult<Point> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(GeoError::MalformedCoordinates(format!(
                "non-finite position ({}, {})", point.x, point.y)));
        }

        if self.source == self.target {
            return Ok(*point);
        }

        let geographic = Self::to_geographic(&self.source, point)?;
        Self::from_geographic(&self.target, &geographic)
    }
}
