//! Coordinate handling for parcel geometries
//!
//! This module provides the coordinate reference systems the converter
//! understands and the point transforms between them.

mod bbox;
mod point;
mod transform;
mod crs;
mod ellipsoid;
mod lcc;
pub mod proj_string;
pub mod definitions;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
pub use self::transform::CoordinateTransformer;
pub use self::crs::{CoordinateSystem, CoordinateSystemFactory};
pub use self::ellipsoid::Ellipsoid;
pub use self::lcc::LambertConformalConic;
