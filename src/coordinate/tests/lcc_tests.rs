//! Tests for the Lambert Conformal Conic projection

extern crate std;

use crate::coordinate::proj_string::ProjParams;
use crate::coordinate::{Ellipsoid, LambertConformalConic};

const CA_ZONE_5: &str = "+proj=lcc +lat_1=35.46666666666667 +lat_2=34.03333333333333 +lat_0=33.5 +lon_0=-118 +x_0=2000000.0001016 +y_0=500000.0001016001 +ellps=GRS80 +datum=NAD83 +to_meter=0.3048006096012192 +no_defs";

fn zone_5() -> LambertConformalConic {
    let params = ProjParams::parse(CA_ZONE_5).unwrap();
    LambertConformalConic::from_params(&params).unwrap()
}

#[test]
fn test_cone_constant_for_zone_5() {
    let lcc = zone_5();
    std::assert!((lcc.cone_constant() - 0.5700118961739549).abs() < 1e-12);
}

#[test]
fn test_inverse_state_plane_feet() {
    let (lon, lat) = zone_5().inverse(6442000.0, 1848000.0).unwrap();
    std::assert!((lon - -118.39513768).abs() < 1e-7, "lon = {}", lon);
    std::assert!((lat - 34.06974792).abs() < 1e-7, "lat = {}", lat);
}

#[test]
fn test_forward_downtown_los_angeles() {
    let (x, y) = zone_5().forward(-118.24, 34.02).unwrap();
    std::assert!((x - 6488939.796).abs() < 0.01, "x = {}", x);
    std::assert!((y - 1829747.371).abs() < 0.01, "y = {}", y);
}

#[test]
fn test_false_origin_maps_to_origin() {
    let lcc = zone_5();
    let (x, y) = lcc.forward(-118.0, 33.5).unwrap();
    std::assert!((x * 0.3048006096012192 - 2000000.0001016).abs() < 1e-6);
    std::assert!((y * 0.3048006096012192 - 500000.0001016001).abs() < 1e-6);
}

#[test]
fn test_round_trip_across_zone() {
    let lcc = zone_5();
    for &(x, y) in &[(6442000.0, 1848000.0), (6000000.0, 1500000.0), (7000000.0, 2400000.0)] {
        let (lon, lat) = lcc.inverse(x, y).unwrap();
        let (bx, by) = lcc.forward(lon, lat).unwrap();
        std::assert!((bx - x).abs() < 1e-4, "x {} -> {}", x, bx);
        std::assert!((by - y).abs() < 1e-4, "y {} -> {}", y, by);
    }
}

#[test]
fn test_single_parallel_form() {
    let lcc = LambertConformalConic::new(Ellipsoid::WGS84, 40.0, 40.0, 40.0, -100.0, 0.0, 0.0, 1.0).unwrap();
    std::assert!((lcc.cone_constant() - 40f64.to_radians().sin()).abs() < 1e-12);

    let (lon, lat) = lcc.inverse(0.0, 0.0).unwrap();
    std::assert!((lon - -100.0).abs() < 1e-9);
    std::assert!((lat - 40.0).abs() < 1e-9);
}

#[test]
fn test_symmetric_parallels_rejected() {
    let result = LambertConformalConic::new(Ellipsoid::GRS80, 30.0, -30.0, 0.0, 0.0, 0.0, 0.0, 1.0);
    std::assert!(result.is_err());
}

#[test]
fn test_missing_standard_parallel_rejected() {
    let params = ProjParams::parse("+proj=lcc +lat_0=33.5 +lon_0=-118").unwrap();
    std::assert!(LambertConformalConic::from_params(&params).is_err());
}

#[test]
fn test_scale_factor_shrinks_offsets() {
    let plain = LambertConformalConic::from_params(
        &ProjParams::parse("+proj=lcc +lat_1=40 +lat_0=40 +lon_0=-100 +ellps=GRS80").unwrap()).unwrap();
    let scaled = LambertConformalConic::from_params(
        &ProjParams::parse("+proj=lcc +lat_1=40 +lat_0=40 +lon_0=-100 +k_0=0.5 +ellps=GRS80").unwrap()).unwrap();
    let scaled_k = LambertConformalConic::from_params(
        &ProjParams::parse("+proj=lcc +lat_1=40 +lat_0=40 +lon_0=-100 +k=0.5 +ellps=GRS80").unwrap()).unwrap();

    let (px, py) = plain.forward(-99.0, 41.0).unwrap();
    let (sx, sy) = scaled.forward(-99.0, 41.0).unwrap();
    std::assert!((sx - px * 0.5).abs() < 1e-6, "x = {} vs {}", sx, px);
    std::assert!((sy - py * 0.5).abs() < 1e-6, "y = {} vs {}", sy, py);
    std::assert_eq!(scaled, scaled_k);

    let (lon, lat) = scaled.inverse(sx, sy).unwrap();
    std::assert!((lon - -99.0).abs() < 1e-9);
    std::assert!((lat - 41.0).abs() < 1e-9);

    let (plain_lon, _) = plain.inverse(100000.0, 100000.0).unwrap();
    let (scaled_lon, _) = scaled.inverse(100000.0, 100000.0).unwrap();
    std::assert!((plain_lon - scaled_lon).abs() > 0.1);
}

#[test]
fn test_scale_factor_must_be_positive() {
    let params = ProjParams::parse("+proj=lcc +lat_1=40 +k_0=0").unwrap();
    std::assert!(LambertConformalConic::from_params(&params).is_err());
}
