//! Custom error types for GeoJSON conversion and reprojection

use std::fmt;
use std::io;

/// Errors raised while adapting, parsing or reprojecting parcel data
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// JSON (de)serialization error
    JsonError(serde_json::Error),
    /// A feature or geometry has nothing to reproject
    MissingGeometry(String),
    /// A coordinate array that is neither a position nor a list of positions
    MalformedCoordinates(String),
    /// A geometry value that cannot be read as a geometry object
    MalformedGeometry(String),
    /// A raw record that is not a JSON object
    InvalidRecord(String),
    /// A PROJ parameter string that cannot be parsed
    InvalidProjection(String),
    /// A projection, datum or transformation this crate does not implement
    UnsupportedProjection(String),
    /// A CRS code with no known definition
    UnknownCrs(String),
    /// Invalid configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::JsonError(e) => write!(f, "JSON error: {}", e),
            GeoError::MissingGeometry(ctx) => write!(f, "Missing geometry: {}", ctx),
            GeoError::MalformedCoordinates(msg) => write!(f, "Malformed coordinates: {}", msg),
            GeoError::MalformedGeometry(msg) => write!(f, "Malformed geometry: {}", msg),
            GeoError::InvalidRecord(msg) => write!(f, "Invalid record: {}", msg),
            GeoError::InvalidProjection(msg) => write!(f, "Invalid projection definition: {}", msg),
            GeoError::UnsupportedProjection(msg) => write!(f, "Unsupported projection: {}", msg),
            GeoError::UnknownCrs(code) => write!(f, "Unknown coordinate reference system: {}", code),
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            GeoError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(error: serde_json::Error) -> Self {
        GeoError::JsonError(error)
    }
}

/// Result type for GeoJSON operations
pub type GeoResult<T> = Result<T, GeoError>;

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}
