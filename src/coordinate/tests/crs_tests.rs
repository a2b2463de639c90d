//! Tests for PROJ string parsing and the CRS registry

extern crate std;

use crate::coordinate::definitions::{self, CrsDefinitions};
use crate::coordinate::proj_string::{ProjParams, US_SURVEY_FOOT};
use crate::coordinate::{CoordinateSystem, CoordinateSystemFactory, Ellipsoid};
use crate::geojson::errors::GeoError;

#[test]
fn test_parse_params_and_flags() {
    let params = ProjParams::parse("+proj=lcc +lat_1=35.5 +units=us-ft +no_defs").unwrap();
    std::assert_eq!(params.projection().unwrap(), "lcc");
    std::assert_eq!(params.get_f64("lat_1").unwrap(), Some(35.5));
    std::assert_eq!(params.get("no_defs"), None);
    std::assert!(params.has("no_defs"));
    std::assert_eq!(params.to_meter().unwrap(), US_SURVEY_FOOT);
}

#[test]
fn test_parse_rejects_stray_tokens() {
    std::assert!(ProjParams::parse("proj=lcc").is_err());
    std::assert!(ProjParams::parse("+proj=lcc lat_1").is_err());
    std::assert!(ProjParams::parse("   ").is_err());
}

#[test]
fn test_non_numeric_value_reported() {
    let params = ProjParams::parse("+proj=lcc +lat_1=north").unwrap();
    match params.get_f64("lat_1") {
        Err(GeoError::InvalidProjection(msg)) => std::assert!(msg.contains("lat_1")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_ellipsoid_resolution() {
    let from_name = ProjParams::parse("+proj=lcc +ellps=GRS80").unwrap();
    std::assert_eq!(from_name.ellipsoid().unwrap(), Ellipsoid::GRS80);

    let from_datum = ProjParams::parse("+proj=lcc +datum=NAD83").unwrap();
    std::assert_eq!(from_datum.ellipsoid().unwrap(), Ellipsoid::GRS80);

    let sphere = ProjParams::parse("+proj=merc +a=6378137 +b=6378137").unwrap();
    std::assert!(sphere.ellipsoid().unwrap().is_sphere());
}

#[test]
fn test_datum_checks() {
    std::assert!(ProjParams::parse("+proj=lcc +datum=NAD83").unwrap().check_datum().is_ok());
    std::assert!(ProjParams::parse("+proj=lcc +towgs84=0,0,0").unwrap().check_datum().is_ok());
    std::assert!(ProjParams::parse("+proj=lcc +datum=NAD27").unwrap().check_datum().is_err());
    std::assert!(ProjParams::parse("+proj=lcc +towgs84=-8,160,176").unwrap().check_datum().is_err());
}

#[test]
fn test_builtin_registry() {
    let registry = definitions::builtin();
    std::assert!(!registry.is_empty());
    std::assert!(registry.codes().contains(&"EPSG:2229"));

    let zone_5 = registry.lookup("epsg:2229").unwrap();
    std::assert_eq!(zone_5.name, "NAD83 / California zone 5 (ftUS)");
    std::assert_eq!(registry.lookup("2229"), Some(zone_5));
    std::assert_eq!(registry.lookup("wgs84").unwrap().code, "EPSG:4326");
}

#[test]
fn test_registry_from_custom_toml() {
    let content = r#"
        [crs."EPSG:9999"]
        proj = "+proj=longlat +datum=WGS84"
    "#;
    let registry = CrsDefinitions::from_str(content).unwrap();
    std::assert_eq!(registry.len(), 1);
    std::assert_eq!(registry.lookup("9999").unwrap().name, "EPSG:9999");

    std::assert!(CrsDefinitions::from_str("[crs.\"X\"]\nname = \"no proj\"").is_err());
}

#[test]
fn test_factory_resolves_codes() {
    std::assert_eq!(CoordinateSystemFactory::from_string("WGS84").unwrap(), CoordinateSystem::WGS84);
    std::assert_eq!(CoordinateSystemFactory::from_epsg(3857).unwrap(), CoordinateSystem::WebMercator);

    let zone_5 = CoordinateSystemFactory::from_string("EPSG:2229").unwrap();
    std::assert_eq!(zone_5.epsg_code(), Some(2229));
    std::assert!(!zone_5.is_geographic());
    std::assert_eq!(zone_5.description(), "NAD83 / California zone 5 (ftUS) (EPSG:2229)");
}

#[test]
fn test_factory_accepts_proj_strings() {
    let crs = CoordinateSystemFactory::from_string(
        "+proj=lcc +lat_1=33 +lat_2=45 +lat_0=39 +lon_0=-96 +datum=NAD83").unwrap();
    std::assert_eq!(crs.epsg_code(), None);
    std::assert!(matches!(crs, CoordinateSystem::LambertConformalConic { .. }));
}

#[test]
fn test_factory_errors() {
    std::assert!(matches!(
        CoordinateSystemFactory::from_string("EPSG:123456"),
        Err(GeoError::UnknownCrs(_))
    ));
    std::assert!(matches!(
        CoordinateSystemFactory::from_string("+proj=tmerc +lat_0=0"),
        Err(GeoError::UnsupportedProjection(_))
    ));
    std::assert!(matches!(
        CoordinateSystemFactory::from_string("+proj=merc +datum=WGS84"),
        Err(GeoError::UnsupportedProjection(_))
    ));
}

#[test]
fn test_mercator_limited_to_web_mercator_parameters() {
    std::assert_eq!(
        CoordinateSystemFactory::from_string("+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m").unwrap(),
        CoordinateSystem::WebMercator
    );

    for definition in [
        "+proj=merc +a=6371000 +b=6371000",
        "+proj=merc +a=6378137 +b=6378137 +lon_0=10",
        "+proj=merc +a=6378137 +b=6378137 +x_0=500000",
        "+proj=merc +a=6378137 +b=6378137 +y_0=-100",
        "+proj=merc +a=6378137 +b=6378137 +k_0=0.9996",
        "+proj=merc +a=6378137 +b=6378137 +lat_ts=45",
        "+proj=merc +a=6378137 +b=6378137 +units=us-ft",
    ] {
        std::assert!(
            matches!(CoordinateSystemFactory::from_string(definition), Err(GeoError::UnsupportedProjection(_))),
            "{} should be rejected", definition
        );
    }
}
