//! GeoJSON objects: geometries, features and feature collections

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::errors::{GeoError, GeoResult};
use super::tree::CoordinateTree;
use crate::coordinate::BoundingBox;

/// A geometry object of any type
///
/// The `type` tag is carried verbatim and never checked against the shape of
/// the coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// The geometry `type` tag, e.g. `Polygon`
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    /// Coordinate tree; `None` when the member is absent or null
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<CoordinateTree>,
    /// Every other member (`bbox`, `crs`, ...)
    #[serde(flatten)]
    pub foreign: Map<String, Value>,
}

impl Geometry {
    /// Create a geometry with no foreign members
    pub fn new(kind: &str, coordinates: CoordinateTree) -> Self {
        Geometry {
            kind: kind.to_string(),
            coordinates: Some(coordinates),
            foreign: Map::new(),
        }
    }

    /// Read a geometry from a JSON value
    pub fn from_value(value: Value) -> GeoResult<Self> {
        if !value.is_object() {
            return Err(GeoError::MalformedGeometry(format!("expected an object, found {}", value)));
        }
        serde_json::from_value(value).map_err(|e| GeoError::MalformedGeometry(e.to_string()))
    }

    /// Extent of all positions, if there are any
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.coordinates.as_ref().and_then(|tree| BoundingBox::from_points(tree.points()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
enum FeatureTag {
    #[default]
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
enum CollectionTag {
    #[default]
    FeatureCollection,
}

/// A GeoJSON Feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default)]
    tag: FeatureTag,
    /// Non-spatial attributes, in their original order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Map<String, Value>,
    /// The feature geometry; absent and null both read as `None`
    #[serde(default)]
    pub geometry: Option<Geometry>,
    /// Every other member (`id`, `bbox`, ...)
    #[serde(flatten)]
    pub foreign: Map<String, Value>,
}

impl Feature {
    /// Create a feature with no foreign members
    pub fn new(properties: Map<String, Value>, geometry: Option<Geometry>) -> Self {
        Feature {
            tag: FeatureTag::Feature,
            properties,
            geometry,
            foreign: Map::new(),
        }
    }

    /// Properties rendered as `key: value` lines for display
    pub fn property_lines(&self) -> Vec<String> {
        self.properties.iter()
            .map(|(key, value)| match value {
                Value::String(s) => format!("{}: {}", key, s),
                other => format!("{}: {}", key, other),
            })
            .collect()
    }

    /// Extent of the geometry, if there is one
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.geometry.as_ref().and_then(Geometry::bounds)
    }
}

/// A GeoJSON FeatureCollection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default)]
    tag: CollectionTag,
    /// Features in order
    pub features: Vec<Feature>,
    /// Every other member
    #[serde(flatten)]
    pub foreign: Map<String, Value>,
}

impl FeatureCollection {
    /// Create a collection with no foreign members
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection {
            tag: CollectionTag::FeatureCollection,
            features,
            foreign: Map::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Extent of every feature geometry
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.features.iter()
            .filter_map(Feature::bounds)
            .reduce(|mut acc, b| {
                acc.merge(&b);
                acc
            })
    }
}

/// Any top-level GeoJSON value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeoJson {
    FeatureCollection(FeatureCollection),
    Feature(Feature),
    Geometry(Geometry),
}

impl GeoJson {
    /// Dispatch on the `type` member; anything but the two wrapper types is a geometry
    pub fn from_value(value: Value) -> GeoResult<Self> {
        match value.get("type").and_then(Value::as_str) {
            Some("FeatureCollection") => Ok(GeoJson::FeatureCollection(serde_json::from_value(value)?)),
            Some("Feature") => Ok(GeoJson::Feature(serde_json::from_value(value)?)),
            _ => Ok(GeoJson::Geometry(Geometry::from_value(value)?)),
        }
    }

    pub fn to_value(&self) -> GeoResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// The `type` tag this value serializes with
    pub fn type_name(&self) -> &str {
        match self {
            GeoJson::FeatureCollection(_) => "FeatureCollection",
            GeoJson::Feature(_) => "Feature",
            GeoJson::Geometry(geometry) => &geometry.kind,
        }
    }
}

impl FromStr for GeoJson {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        GeoJson::from_value(serde_json::from_str(s)?)
    }
}

impl<'de> Deserialize<'de> for GeoJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        GeoJson::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<Geometry> for GeoJson {
    fn from(geometry: Geometry) -> Self {
        GeoJson::Geometry(geometry)
    }
}

impl From<Feature> for GeoJson {
    fn from(feature: Feature) -> Self {
        GeoJson::Feature(feature)
    }
}

impl From<FeatureCollection> for GeoJson {
    fn from(collection: FeatureCollection) -> Self {
        GeoJson::FeatureCollection(collection)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Map<String, Value>, D::Error> {
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}
