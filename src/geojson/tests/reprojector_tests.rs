//! Tests for GeoJSON reprojection

extern crate std;

use serde_json::{json, Value};

use crate::coordinate::{CoordinateSystem, CoordinateTransformer, Point};
use crate::geojson::errors::GeoError;
use crate::geojson::{CoordinateTree, Feature, FeatureAdapter, FeatureCollection, GeoJson, Reprojector};
use super::test_utils::{assert_close, parcel_record, parcel_ring, parcel_ring_wgs84, zone_5_to_wgs84};

#[test]
fn test_bare_point_geometry() {
    let input: GeoJson = r#"{"type":"Point","coordinates":[6442000.0,1848000.0]}"#.parse().unwrap();
    let output = zone_5_to_wgs84().reproject(&input).unwrap();

    match output {
        GeoJson::Geometry(geometry) => {
            std::assert_eq!(geometry.kind, "Point");
            match geometry.coordinates {
                Some(CoordinateTree::Leaf(point)) => {
                    assert_close(point.x, -118.395138, 1e-5);
                    assert_close(point.y, 34.069748, 1e-5);
                }
                other => panic!("expected a position, got {:?}", other),
            }
        }
        other => panic!("expected a geometry, got {:?}", other),
    }
}

#[test]
fn test_parcel_record_end_to_end() {
    let feature = FeatureAdapter::adapt_value(parcel_record()).unwrap();
    let converted = zone_5_to_wgs84().reproject_feature(&feature).unwrap();

    std::assert_eq!(converted.properties, feature.properties);

    let input_tree = feature.geometry.as_ref().unwrap().coordinates.as_ref().unwrap();
    let output_tree = converted.geometry.as_ref().unwrap().coordinates.as_ref().unwrap();
    std::assert!(input_tree.same_shape(output_tree));

    let points = output_tree.points();
    for (point, (lon, lat)) in points.iter().zip(parcel_ring_wgs84()) {
        assert_close(point.x, lon, 1e-8);
        assert_close(point.y, lat, 1e-8);
    }
    // ring stays closed
    std::assert_eq!(points.first(), points.last());
}

#[test]
fn test_input_is_not_modified() {
    let input = GeoJson::from_value(json!({ "type": "LineString", "coordinates": parcel_ring() })).unwrap();
    let before = input.clone();
    let output = zone_5_to_wgs84().reproject(&input).unwrap();
    std::assert_eq!(input, before);
    std::assert_ne!(input, output);
}

#[test]
fn test_shape_preserved_for_all_depths() {
    let reprojector = zone_5_to_wgs84();
    let shapes = [
        json!([6442000.0, 1848000.0]),
        parcel_ring(),
        json!([parcel_ring(), parcel_ring()]),
        json!([[parcel_ring()], [parcel_ring(), parcel_ring()]]),
        json!([[], [parcel_ring()]]),
    ];

    for shape in shapes.iter() {
        let tree = CoordinateTree::from_value(shape).unwrap();
        let converted = reprojector.convert_coordinates(&tree).unwrap();
        std::assert!(tree.same_shape(&converted), "shape changed for {}", shape);
        std::assert_eq!(tree.leaf_count(), converted.leaf_count());
    }
}

#[test]
fn test_empty_coordinates_give_empty_branch() {
    let converted = zone_5_to_wgs84().convert_coordinates(&CoordinateTree::Branch(vec![])).unwrap();
    std::assert_eq!(converted, CoordinateTree::Branch(vec![]));
}

#[test]
fn test_feature_members_untouched() {
    let input = GeoJson::from_value(json!({
        "type": "Feature",
        "id": "parcel-7",
        "properties": { "owner": "City", "zoning": ["R1", "R2"] },
        "geometry": { "type": "Point", "coordinates": [6442000.0, 1848000.0], "bbox": [0, 0, 0, 0] }
    })).unwrap();

    let output = zone_5_to_wgs84().reproject(&input).unwrap().to_value().unwrap();
    std::assert_eq!(output["type"], json!("Feature"));
    std::assert_eq!(output["id"], json!("parcel-7"));
    std::assert_eq!(output["properties"], json!({ "owner": "City", "zoning": ["R1", "R2"] }));
    std::assert_eq!(output["geometry"]["bbox"], json!([0, 0, 0, 0]));
    std::assert_eq!(output["geometry"]["type"], json!("Point"));
}

#[test]
fn test_collection_keeps_count_and_order() {
    let reprojector = zone_5_to_wgs84();
    let features: Vec<Feature> = [1848000.0, 1849000.0, 1850000.0].iter()
        .enumerate()
        .map(|(i, y)| FeatureAdapter::adapt_value(json!({
            "n": i,
            "geometry": { "type": "Point", "coordinates": [6442000.0, y] }
        })).unwrap())
        .collect();
    let collection = FeatureCollection::new(features);

    let output = reprojector.reproject_collection(&collection).unwrap();
    std::assert_eq!(output.len(), 3);
    let order: Vec<Value> = output.features.iter().map(|f| f.properties["n"].clone()).collect();
    std::assert_eq!(order, vec![json!(0), json!(1), json!(2)]);

    let lats: Vec<f64> = output.features.iter().map(|f| f.bounds().unwrap().min_y).collect();
    std::assert!(lats[0] < lats[1] && lats[1] < lats[2]);
}

#[test]
fn test_missing_geometry_fails() {
    let reprojector = zone_5_to_wgs84();

    let feature = FeatureAdapter::adapt_value(json!({ "parcelId": "1" })).unwrap();
    std::assert!(matches!(reprojector.reproject_feature(&feature), Err(GeoError::MissingGeometry(_))));

    let no_coordinates = GeoJson::from_value(json!({ "type": "GeometryCollection", "geometries": [] })).unwrap();
    std::assert!(matches!(reprojector.reproject(&no_coordinates), Err(GeoError::MissingGeometry(_))));

    let collection = FeatureCollection::new(vec![feature]);
    match reprojector.reproject_collection(&collection) {
        Err(GeoError::MissingGeometry(ctx)) => std::assert!(ctx.starts_with("feature 0")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_applying_twice_is_not_idempotent() {
    let reprojector = zone_5_to_wgs84();
    let once = reprojector.project_point(&Point::new(6442000.0, 1848000.0)).unwrap();
    let twice = reprojector.project_point(&once).unwrap();
    std::assert!((twice.x - once.x).abs() > 1.0);
}

#[test]
fn test_round_trip_through_inverse() {
    let forward = zone_5_to_wgs84();
    let inverse = Reprojector::new(forward.transformer().inverse());

    let tree = CoordinateTree::from_value(&json!([parcel_ring()])).unwrap();
    let back = inverse.convert_coordinates(&forward.convert_coordinates(&tree).unwrap()).unwrap();

    for (a, b) in tree.points().iter().zip(back.points()) {
        assert_close(b.x, a.x, 1e-4);
        assert_close(b.y, a.y, 1e-4);
    }
}

#[test]
fn test_configurable_crs_pair() {
    let to_mercator = Reprojector::new(CoordinateTransformer::new(CoordinateSystem::WGS84, CoordinateSystem::WebMercator));
    let point = to_mercator.project_point(&Point::new(0.0, 0.0)).unwrap();
    assert_close(point.x, 0.0, 1e-9);
    assert_close(point.y, 0.0, 1e-6);
}
