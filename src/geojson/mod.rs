//! GeoJSON model, record adaptation and reprojection
//!
//! Raw parcel records flow through [`FeatureAdapter`] into [`Feature`]s,
//! which [`Reprojector`] rewrites into the target coordinate system.

pub mod errors;
pub mod tree;
pub mod object;
pub mod adapter;
pub mod reprojector;
#[cfg(test)]
mod tests;

pub use errors::{GeoError, GeoResult};
pub use tree::CoordinateTree;
pub use object::{Feature, FeatureCollection, GeoJson, Geometry};
pub use adapter::FeatureAdapter;
pub use reprojector::Reprojector;
