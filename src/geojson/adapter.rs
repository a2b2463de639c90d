//! Adaptation of flat parcel records into GeoJSON Features

use log::debug;
use serde_json::{Map, Value};

use super::errors::{GeoError, GeoResult};
use super::object::{Feature, Geometry};

/// Converts `{ ...properties, geometry }` records into Features
pub struct FeatureAdapter;

impl FeatureAdapter {
    /// The reserved record key holding the geometry
    pub const GEOMETRY_KEY: &'static str = "geometry";

    /// Split a record into properties and geometry
    ///
    /// Every key except `geometry` becomes a property, in record order. A
    /// missing or null geometry yields a Feature without one; the
    /// reprojector reports that later. A geometry given as a whole Feature
    /// is unwrapped to the Feature's own geometry.
    ///
    /// # Arguments
    /// * `record` - The raw record
    ///
    /// # Returns
    /// The Feature, or `MalformedGeometry` if the geometry value cannot be read
    pub fn adapt(record: Map<String, Value>) -> GeoResult<Feature> {
        let mut properties = Map::with_capacity(record.len());
        let mut geometry_value = None;

        for (key, value) in record {
            if key == Self::GEOMETRY_KEY {
                geometry_value = Some(value);
            } else {
                properties.insert(key, value);
            }
        }

        let geometry = match geometry_value {
            None | Some(Value::Null) => None,
            Some(value) => Self::read_geometry(value)?,
        };

        debug!("Adapted record with {} properties (geometry: {})",
               properties.len(), geometry.as_ref().map_or("none", |g| g.kind.as_str()));

        Ok(Feature::new(properties, geometry))
    }

    /// Adapt any JSON value, rejecting anything but an object
    pub fn adapt_value(record: Value) -> GeoResult<Feature> {
        match record {
            Value::Object(map) => Self::adapt(map),
            other => Err(GeoError::InvalidRecord(format!("expected an object, found {}", json_kind(&other)))),
        }
    }

    fn read_geometry(value: Value) -> GeoResult<Option<Geometry>> {
        let is_feature = value.get("type").and_then(Value::as_str) == Some("Feature");
        if !is_feature {
            return Geometry::from_value(value).map(Some);
        }

        match value {
            Value::Object(mut feature) => match feature.remove(Self::GEOMETRY_KEY) {
                None | Some(Value::Null) => Ok(None),
                Some(inner) => Geometry::from_value(inner).map(Some),
            },
            _ => Ok(None),
        }
    }
}

/// Short name of a JSON value's type for messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
