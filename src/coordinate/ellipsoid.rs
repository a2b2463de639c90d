//! Reference ellipsoids

use crate::geojson::errors::{GeoError, GeoResult};

/// A reference ellipsoid given by its semi-major axis and flattening
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    pub a: f64,
    /// Flattening (0 for a sphere)
    pub f: f64,
}

impl Ellipsoid {
    /// GRS 1980, used by NAD83
    pub const GRS80: Ellipsoid = Ellipsoid { a: 6378137.0, f: 1.0 / 298.257222101 };
    /// WGS 84
    pub const WGS84: Ellipsoid = Ellipsoid { a: 6378137.0, f: 1.0 / 298.257223563 };
    /// Clarke 1866, used by NAD27
    pub const CLARKE_1866: Ellipsoid = Ellipsoid { a: 6378206.4, f: 1.0 / 294.978698213898 };

    /// Ellipsoid from a semi-major axis and inverse flattening
    pub fn from_inverse_flattening(a: f64, rf: f64) -> Self {
        Ellipsoid { a, f: 1.0 / rf }
    }

    /// Ellipsoid from both semi-axes
    pub fn from_axes(a: f64, b: f64) -> Self {
        Ellipsoid { a, f: (a - b) / a }
    }

    /// Look up a named ellipsoid as used by PROJ's `+ellps`
    pub fn from_name(name: &str) -> GeoResult<Self> {
        match name {
            "GRS80" => Ok(Self::GRS80),
            "WGS84" => Ok(Self::WGS84),
            "clrk66" => Ok(Self::CLARKE_1866),
            _ => Err(GeoError::UnsupportedProjection(format!("ellipsoid '{}'", name))),
        }
    }

    /// Square of the first eccentricity
    pub fn eccentricity_squared(&self) -> f64 {
        2.0 * self.f - self.f * self.f
    }

    /// First eccentricity
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    pub fn is_sphere(&self) -> bool {
        self.f == 0.0
    }
}
