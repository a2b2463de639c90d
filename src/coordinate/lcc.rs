//! Lambert Conformal Conic projection (ellipsoidal, one or two standard parallels)
//!
//! Follows the formulation in Snyder, "Map Projections: A Working Manual",
//! equations 15-1 through 15-11 and 7-9 for the inverse latitude.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::ellipsoid::Ellipsoid;
use super::proj_string::ProjParams;
use crate::geojson::errors::{GeoError, GeoResult};

const EPSILON: f64 = 1e-10;
const LATITUDE_TOLERANCE: f64 = 1e-12;
const MAX_ITERATIONS: usize = 15;

/// A configured Lambert Conformal Conic projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertConformalConic {
    ellipsoid: Ellipsoid,
    /// Central meridian in radians
    lon_0: f64,
    /// False easting in meters
    x_0: f64,
    /// False northing in meters
    y_0: f64,
    /// Meters per projected unit
    to_meter: f64,
    /// Cone constant
    n: f64,
    /// Scaled mapping constant (a * F)
    af: f64,
    /// Radius of the parallel of origin
    rho_0: f64,
}

impl LambertConformalConic {
    /// Build the projection from angles in degrees and offsets in meters
    ///
    /// # Arguments
    /// * `ellipsoid` - Reference ellipsoid
    /// * `lat_1`, `lat_2` - Standard parallels
    /// * `lat_0` - Latitude of origin
    /// * `lon_0` - Central meridian
    /// * `x_0`, `y_0` - False easting and northing in meters
    /// * `to_meter` - Meters per projected unit
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ellipsoid: Ellipsoid,
        lat_1: f64,
        lat_2: f64,
        lat_0: f64,
        lon_0: f64,
        x_0: f64,
        y_0: f64,
        to_meter: f64,
    ) -> GeoResult<Self> {
        let phi_1 = lat_1.to_radians();
        let phi_2 = lat_2.to_radians();
        let phi_0 = lat_0.to_radians();

        if (phi_1 + phi_2).abs() < EPSILON {
            return Err(GeoError::InvalidProjection(
                "standard parallels are symmetric about the equator".to_string()));
        }

        let e = ellipsoid.eccentricity();
        let m_1 = msfn(phi_1, e);
        let t_1 = tsfn(phi_1, e);

        let n = if (phi_1 - phi_2).abs() < EPSILON {
            phi_1.sin()
        } else {
            let m_2 = msfn(phi_2, e);
            let t_2 = tsfn(phi_2, e);
            (m_1.ln() - m_2.ln()) / (t_1.ln() - t_2.ln())
        };

        let af = ellipsoid.a * m_1 / (n * t_1.powf(n));
        let rho_0 = if (phi_0.abs() - FRAC_PI_2).abs() < EPSILON {
            0.0
        } else {
            af * tsfn(phi_0, e).powf(n)
        };

        Ok(LambertConformalConic {
            ellipsoid,
            lon_0: lon_0.to_radians(),
            x_0,
            y_0,
            to_meter,
            n,
            af,
            rho_0,
        })
    }

    /// Build the projection from `+proj=lcc` parameters
    pub fn from_params(params: &ProjParams) -> GeoResult<Self> {
        let lat_1 = params.require_f64("lat_1")?;
        let lat_2 = params.get_f64_or("lat_2", lat_1)?;
        let lat_0 = params.get_f64_or("lat_0", 0.0)?;
        let k_0 = match params.get_f64("k_0")? {
            Some(k_0) => k_0,
            None => params.get_f64_or("k", 1.0)?,
        };

        Self::new(
            params.ellipsoid()?,
            lat_1,
            lat_2,
            lat_0,
            params.get_f64_or("lon_0", 0.0)?,
            params.get_f64_or("x_0", 0.0)?,
            params.get_f64_or("y_0", 0.0)?,
            params.to_meter()?,
        )?
        .with_scale_factor(k_0)
    }

    /// Apply a scale factor on the standard parallel (`+k_0`)
    pub fn with_scale_factor(mut self, k_0: f64) -> GeoResult<Self> {
        if !(k_0.is_finite() && k_0 > 0.0) {
            return Err(GeoError::InvalidProjection(format!("+k_0={} must be positive", k_0)));
        }
        self.af *= k_0;
        self.rho_0 *= k_0;
        Ok(self)
    }

    /// Cone constant
    pub fn cone_constant(&self) -> f64 {
        self.n
    }

    /// Geographic (degrees) to projected (CRS units)
    pub fn forward(&self, lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
        let phi = lat.to_radians();
        let e = self.ellipsoid.eccentricity();

        let rho = if (phi.abs() - FRAC_PI_2).abs() < EPSILON {
            if phi * self.n <= 0.0 {
                return Err(GeoError::GenericError(format!(
                    "latitude {} projects to infinity", lat)));
            }
            0.0
        } else {
            self.af * tsfn(phi, e).powf(self.n)
        };

        let theta = self.n * adjust_lon(lon.to_radians() - self.lon_0);
        let x = rho * theta.sin() + self.x_0;
        let y = self.rho_0 - rho * theta.cos() + self.y_0;

        Ok((x / self.to_meter, y / self.to_meter))
    }

    /// Projected (CRS units) to geographic (degrees)
    pub fn inverse(&self, x: f64, y: f64) -> GeoResult<(f64, f64)> {
        let e = self.ellipsoid.eccentricity();
        let mut x = x * self.to_meter - self.x_0;
        let mut y = self.rho_0 - (y * self.to_meter - self.y_0);

        let mut rho = x.hypot(y);
        if self.n < 0.0 {
            rho = -rho;
            x = -x;
            y = -y;
        }

        if rho == 0.0 {
            let lat = if self.n > 0.0 { 90.0 } else { -90.0 };
            return Ok((self.lon_0.to_degrees(), lat));
        }

        let ts = (rho / self.af).powf(1.0 / self.n);
        let phi = phi2(ts, e)?;
        let lambda = adjust_lon(x.atan2(y) / self.n + self.lon_0);

        Ok((lambda.to_degrees(), phi.to_degrees()))
    }
}

/// Snyder eq. 14-15
fn msfn(phi: f64, e: f64) -> f64 {
    let sin_phi = phi.sin();
    phi.cos() / (1.0 - e * e * sin_phi * sin_phi).sqrt()
}

/// Snyder eq. 15-9
fn tsfn(phi: f64, e: f64) -> f64 {
    let con = e * phi.sin();
    (FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - con) / (1.0 + con)).powf(e / 2.0)
}

/// Latitude from the isometric t value, Snyder eq. 7-9
fn phi2(ts: f64, e: f64) -> GeoResult<f64> {
    let half_e = e / 2.0;
    let mut phi = FRAC_PI_2 - 2.0 * ts.atan();

    for _ in 0..MAX_ITERATIONS {
        let con = e * phi.sin();
        let next = FRAC_PI_2 - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(half_e)).atan();
        let delta = (next - phi).abs();
        phi = next;
        if delta < LATITUDE_TOLERANCE {
            return Ok(phi);
        }
    }

    if phi.is_finite() {
        Ok(phi)
    } else {
        Err(GeoError::GenericError("inverse latitude did not converge".to_string()))
    }
}

/// Wrap a longitude in radians into [-PI, PI]
fn adjust_lon(lon: f64) -> f64 {
    if lon.abs() <= PI {
        lon
    } else {
        lon - (2.0 * PI) * ((lon + PI) / (2.0 * PI)).floor()
    }
}
