//! Point structure for representing positions

/// A position in a coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (easting, or longitude in geographic systems)
    pub x: f64,
    /// Y coordinate (northing, or latitude in geographic systems)
    pub y: f64,
    /// Z coordinate (elevation, optional, never transformed)
    pub z: Option<f64>,
}

impl Point {
    /// Create a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y, z: None }
    }

    /// Create a new 3D point
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z: Some(z) }
    }

    /// Check if this point has a Z coordinate
    pub fn has_z(&self) -> bool {
        self.z.is_some()
    }

    /// Copy of this point with new horizontal values and the same Z
    pub fn with_xy(&self, x: f64, y: f64) -> Self {
        Point { x, y, z: self.z }
    }

    /// Parse a point from a string (format: "x,y" or "x,y,z")
    pub fn from_string(point_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = point_str.split(',').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err("Coordinate must be in format 'x,y' or 'x,y,z'".to_string());
        }

        let x = parts[0].trim().parse::<f64>()
            .map_err(|_| format!("Invalid x value: {}", parts[0].trim()))?;
        let y = parts[1].trim().parse::<f64>()
            .map_err(|_| format!("Invalid y value: {}", parts[1].trim()))?;

        match parts.get(2) {
            Some(z_str) => {
                let z = z_str.trim().parse::<f64>()
                    .map_err(|_| format!("Invalid z value: {}", z_str.trim()))?;
                Ok(Point::new_3d(x, y, z))
            }
            None => Ok(Point::new(x, y)),
        }
    }
}
