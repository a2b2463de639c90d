pub mod coordinate;
pub mod geojson;
pub mod parcel;
pub mod utils;
pub mod commands;
pub mod cli;
pub mod api;

pub use crate::api::ParcelKit;

pub use coordinate::{BoundingBox, Point, CoordinateTransformer, CoordinateSystem, CoordinateSystemFactory};
pub use geojson::{CoordinateTree, Feature, FeatureAdapter, FeatureCollection, GeoError, GeoJson, GeoResult, Geometry, Reprojector};
pub use parcel::{BatchPolicy, ConversionConfig, ConversionReport};
