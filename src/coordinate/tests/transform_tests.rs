//! Tests for point transformation between coordinate systems

extern crate std;

use crate::coordinate::{BoundingBox, CoordinateSystem, CoordinateSystemFactory, CoordinateTransformer, Point};

fn state_plane_to_wgs84() -> CoordinateTransformer {
    CoordinateTransformer::new(
        CoordinateSystemFactory::from_string("EPSG:2229").unwrap(),
        CoordinateSystem::WGS84,
    )
}

#[test]
fn test_state_plane_to_wgs84() {
    let result = state_plane_to_wgs84().transform_point(&Point::new(6442000.0, 1848000.0)).unwrap();
    std::assert!((result.x - -118.395).abs() < 0.001, "lon = {}", result.x);
    std::assert!((result.y - 34.070).abs() < 0.001, "lat = {}", result.y);
    std::assert!(!result.has_z());
}

#[test]
fn test_z_passes_through() {
    let result = state_plane_to_wgs84().transform_point(&Point::new_3d(6442000.0, 1848000.0, 120.5)).unwrap();
    std::assert_eq!(result.z, Some(120.5));
}

#[test]
fn test_inverse_round_trip() {
    let forward = state_plane_to_wgs84();
    let inverse = forward.inverse();
    std::assert_eq!(inverse.source(), forward.target());

    let original = Point::new(6487847.0, 1841468.25);
    let back = inverse.transform_point(&forward.transform_point(&original).unwrap()).unwrap();
    std::assert!((back.x - original.x).abs() < 1e-4);
    std::assert!((back.y - original.y).abs() < 1e-4);
}

#[test]
fn test_identity_transform() {
    let transformer = CoordinateTransformer::new(CoordinateSystem::WGS84, CoordinateSystem::WGS84);
    let point = Point::new(-118.24, 34.05);
    std::assert_eq!(transformer.transform_point(&point).unwrap(), point);
}

#[test]
fn test_state_plane_to_web_mercator() {
    let transformer = CoordinateTransformer::new(
        CoordinateSystemFactory::from_string("EPSG:2229").unwrap(),
        CoordinateSystem::WebMercator,
    );
    let result = transformer.transform_point(&Point::new(6442000.0, 1848000.0)).unwrap();
    let (lon, lat) = CoordinateTransformer::web_mercator_to_wgs84(result.x, result.y);
    std::assert!((lon - -118.39513768).abs() < 1e-6);
    std::assert!((lat - 34.06974792).abs() < 1e-6);
}

#[test]
fn test_non_finite_input_rejected() {
    std::assert!(state_plane_to_wgs84().transform_point(&Point::new(f64::NAN, 0.0)).is_err());
}

#[test]
fn test_bounding_box_from_points() {
    let points = [Point::new(1.0, 5.0), Point::new(-2.0, 3.0), Point::new(4.0, -1.0)];
    let bbox = BoundingBox::from_points(points.iter()).unwrap();
    std::assert_eq!(bbox, BoundingBox::new(-2.0, -1.0, 4.0, 5.0));
    std::assert_eq!(bbox.center(), Point::new(1.0, 2.0));
    std::assert!(bbox.contains(&Point::new(0.0, 0.0)));
    std::assert!(BoundingBox::from_points(std::iter::empty()).is_none());
}

#[test]
fn test_point_from_string() {
    std::assert_eq!(Point::from_string("6442000, 1848000").unwrap(), Point::new(6442000.0, 1848000.0));
    std::assert_eq!(Point::from_string("1,2,3").unwrap(), Point::new_3d(1.0, 2.0, 3.0));
    std::assert!(Point::from_string("1").is_err());
    std::assert!(Point::from_string("a,b").is_err());
}
