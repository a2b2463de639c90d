//! Parcel batch pipeline
//!
//! Raw records are adapted, reprojected, and gathered into a
//! FeatureCollection together with a report of what was left out.

pub mod config;
pub mod converter;
pub mod records;

pub use config::{BatchPolicy, ConversionConfig, DEFAULT_SOURCE_CRS, DEFAULT_TARGET_CRS};
pub use converter::{ConversionReport, ParcelConverter, SkipReason, SkippedRecord};
pub use records::{parse_input, ParcelInput};
