//! Reading raw parcel input from JSON text

use serde_json::{Map, Value};

use crate::geojson::adapter::json_kind;
use crate::geojson::errors::{GeoError, GeoResult};
use crate::geojson::Feature;

/// Parcel input as found in the source text
#[derive(Debug, Clone, PartialEq)]
pub enum ParcelInput {
    /// Flat `{ ...properties, geometry }` records
    Records(Vec<Value>),
    /// GeoJSON Features, still undecoded so each one can fail on its own
    Features {
        features: Vec<Value>,
        /// Members of the enclosing FeatureCollection other than `type` and `features`
        collection: Map<String, Value>,
    },
}

impl ParcelInput {
    pub fn len(&self) -> usize {
        match self {
            ParcelInput::Records(records) => records.len(),
            ParcelInput::Features { features, .. } => features.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse JSON text into parcel input
///
/// Accepts an array of records, a single record, a Feature, or a
/// FeatureCollection. Features are kept whole so their `id` and other
/// members reach the output untouched.
pub fn parse_input(input: &str) -> GeoResult<ParcelInput> {
    let value: Value = serde_json::from_str(input)?;

    match value {
        Value::Array(records) => Ok(ParcelInput::Records(records)),
        Value::Object(object) => match object.get("type").and_then(Value::as_str) {
            Some("FeatureCollection") => collection_input(object),
            Some("Feature") => Ok(ParcelInput::Features {
                features: vec![Value::Object(object)],
                collection: Map::new(),
            }),
            _ => Ok(ParcelInput::Records(vec![Value::Object(object)])),
        },
        other => Err(GeoError::InvalidRecord(format!(
            "expected an array or object of records, found {}", json_kind(&other)))),
    }
}

fn collection_input(mut collection: Map<String, Value>) -> GeoResult<ParcelInput> {
    let features = match collection.remove("features") {
        Some(Value::Array(features)) => features,
        _ => return Err(GeoError::InvalidRecord("FeatureCollection has no features array".to_string())),
    };
    collection.remove("type");

    Ok(ParcelInput::Features { features, collection })
}

/// Decode one member of a `features` array
pub(crate) fn feature_from_value(value: Value) -> GeoResult<Feature> {
    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| GeoError::InvalidRecord(format!("unreadable Feature: {}", e))),
        other => Err(GeoError::InvalidRecord(format!("expected a Feature, found {}", json_kind(&other)))),
    }
}
