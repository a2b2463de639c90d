//! Structure-preserving reprojection of GeoJSON coordinates

use log::debug;

use super::errors::{GeoError, GeoResult};
use super::object::{Feature, FeatureCollection, GeoJson, Geometry};
use super::tree::CoordinateTree;
use crate::coordinate::{CoordinateSystemFactory, CoordinateTransformer, Point};

/// Rewrites every position of a GeoJSON value through a fixed transform
///
/// Inputs are borrowed and never modified. Everything except coordinates is
/// copied into the result unchanged.
#[derive(Debug, Clone)]
pub struct Reprojector {
    transformer: CoordinateTransformer,
}

impl Reprojector {
    /// Create a reprojector around a configured transformer
    pub fn new(transformer: CoordinateTransformer) -> Self {
        Reprojector { transformer }
    }

    /// Create a reprojector from two CRS identifiers
    ///
    /// # Arguments
    /// * `source` - Source CRS (`EPSG:2229`, `WGS84`, or a PROJ string)
    /// * `target` - Target CRS, same forms
    pub fn from_crs(source: &str, target: &str) -> GeoResult<Self> {
        let source = CoordinateSystemFactory::from_string(source)?;
        let target = CoordinateSystemFactory::from_string(target)?;
        debug!("Reprojecting from {} to {}", source.description(), target.description());
        Ok(Reprojector::new(CoordinateTransformer::new(source, target)))
    }

    pub fn transformer(&self) -> &CoordinateTransformer {
        &self.transformer
    }

    /// Reproject any GeoJSON value
    pub fn reproject(&self, geojson: &GeoJson) -> GeoResult<GeoJson> {
        match geojson {
            GeoJson::FeatureCollection(collection) => {
                self.reproject_collection(collection).map(GeoJson::FeatureCollection)
            }
            GeoJson::Feature(feature) => self.reproject_feature(feature).map(GeoJson::Feature),
            GeoJson::Geometry(geometry) => self.reproject_geometry(geometry).map(GeoJson::Geometry),
        }
    }

    /// Reproject every feature of a collection, in order
    ///
    /// The first feature that fails fails the whole collection.
    pub fn reproject_collection(&self, collection: &FeatureCollection) -> GeoResult<FeatureCollection> {
        let features = collection.features.iter()
            .enumerate()
            .map(|(index, feature)| self.reproject_feature(feature).map_err(|e| match e {
                GeoError::MissingGeometry(ctx) => GeoError::MissingGeometry(format!("feature {}: {}", index, ctx)),
                other => other,
            }))
            .collect::<GeoResult<Vec<_>>>()?;

        let mut reprojected = FeatureCollection::new(features);
        reprojected.foreign = collection.foreign.clone();
        Ok(reprojected)
    }

    /// Reproject a feature's geometry, keeping properties and other members
    pub fn reproject_feature(&self, feature: &Feature) -> GeoResult<Feature> {
        let geometry = feature.geometry.as_ref()
            .ok_or_else(|| GeoError::MissingGeometry("feature has no geometry".to_string()))?;

        let mut reprojected = Feature::new(feature.properties.clone(), Some(self.reproject_geometry(geometry)?));
        reprojected.foreign = feature.foreign.clone();
        Ok(reprojected)
    }

    /// Reproject a bare geometry's coordinates
    pub fn reproject_geometry(&self, geometry: &Geometry) -> GeoResult<Geometry> {
        let coordinates = geometry.coordinates.as_ref().ok_or_else(|| {
            GeoError::MissingGeometry(format!("{} geometry has no coordinates", describe_kind(&geometry.kind)))
        })?;

        Ok(Geometry {
            kind: geometry.kind.clone(),
            coordinates: Some(self.convert_coordinates(coordinates)?),
            foreign: geometry.foreign.clone(),
        })
    }

    /// Transform every position in a tree, preserving its shape
    pub fn convert_coordinates(&self, tree: &CoordinateTree) -> GeoResult<CoordinateTree> {
        match tree {
            CoordinateTree::Leaf(point) => self.project_point(point).map(CoordinateTree::Leaf),
            CoordinateTree::Branch(children) => children.iter()
                .map(|child| self.convert_coordinates(child))
                .collect::<GeoResult<Vec<_>>>()
                .map(CoordinateTree::Branch),
        }
    }

    /// Transform a single position
    pub fn project_point(&self, point: &Point) -> GeoResult<Point> {
        self.transformer.transform_point(point)
    }
}

fn describe_kind(kind: &str) -> &str {
    if kind.is_empty() { "untyped" } else { kind }
}
