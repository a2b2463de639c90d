//! Typed coordinate trees
//!
//! GeoJSON nests positions to a depth that depends on the geometry type
//! (Point 0, LineString 1, Polygon 2, MultiPolygon 3). The tree is built
//! once from JSON so later passes never have to guess what a node is.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

use super::errors::{GeoError, GeoResult};
use crate::coordinate::Point;

/// A position (leaf) or an ordered list of sub-trees (branch)
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateTree {
    /// A single `[x, y]` or `[x, y, z]` position
    Leaf(Point),
    /// A nested array of positions or further arrays
    Branch(Vec<CoordinateTree>),
}

impl CoordinateTree {
    /// Build a tree from a JSON coordinates value
    ///
    /// An array whose first element is a number is a position. Every other
    /// array is a branch, including the empty array.
    pub fn from_value(value: &Value) -> GeoResult<Self> {
        match value {
            Value::Array(items) => match items.first() {
                Some(Value::Number(_)) => Self::leaf_from_items(items),
                _ => items.iter()
                    .map(Self::from_value)
                    .collect::<GeoResult<Vec<_>>>()
                    .map(CoordinateTree::Branch),
            },
            other => Err(GeoError::MalformedCoordinates(format!(
                "expected an array, found {}", other))),
        }
    }

    fn leaf_from_items(items: &[Value]) -> GeoResult<Self> {
        let values = items.iter()
            .map(|item| item.as_f64().ok_or_else(|| GeoError::MalformedCoordinates(format!(
                "position mixes numbers with {}", item))))
            .collect::<GeoResult<Vec<f64>>>()?;

        match values.as_slice() {
            [x, y] => Ok(CoordinateTree::Leaf(Point::new(*x, *y))),
            [x, y, z] => Ok(CoordinateTree::Leaf(Point::new_3d(*x, *y, *z))),
            _ => Err(GeoError::MalformedCoordinates(format!(
                "position has {} values, expected 2 or 3", values.len()))),
        }
    }

    /// Convert the tree back into nested JSON arrays
    pub fn to_value(&self) -> Value {
        match self {
            CoordinateTree::Leaf(point) => {
                let mut position = vec![Value::from(point.x), Value::from(point.y)];
                if let Some(z) = point.z {
                    position.push(Value::from(z));
                }
                Value::Array(position)
            }
            CoordinateTree::Branch(children) => {
                Value::Array(children.iter().map(CoordinateTree::to_value).collect())
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, CoordinateTree::Leaf(_))
    }

    /// Number of positions in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            CoordinateTree::Leaf(_) => 1,
            CoordinateTree::Branch(children) => children.iter().map(CoordinateTree::leaf_count).sum(),
        }
    }

    /// Nesting depth above the positions (a bare position is 0)
    pub fn depth(&self) -> usize {
        match self {
            CoordinateTree::Leaf(_) => 0,
            CoordinateTree::Branch(children) => {
                1 + children.iter().map(CoordinateTree::depth).max().unwrap_or(0)
            }
        }
    }

    /// All positions in document order
    pub fn points(&self) -> Vec<&Point> {
        let mut points = Vec::with_capacity(self.leaf_count());
        self.collect_points(&mut points);
        points
    }

    fn collect_points<'a>(&'a self, out: &mut Vec<&'a Point>) {
        match self {
            CoordinateTree::Leaf(point) => out.push(point),
            CoordinateTree::Branch(children) => {
                for child in children {
                    child.collect_points(out);
                }
            }
        }
    }

    /// Whether both trees have the same nesting and lengths at every level
    pub fn same_shape(&self, other: &CoordinateTree) -> bool {
        match (self, other) {
            (CoordinateTree::Leaf(a), CoordinateTree::Leaf(b)) => a.has_z() == b.has_z(),
            (CoordinateTree::Branch(a), CoordinateTree::Branch(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
            }
            _ => false,
        }
    }
}

impl Serialize for CoordinateTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CoordinateTree::Leaf(point) => {
                let mut seq = serializer.serialize_seq(Some(if point.has_z() { 3 } else { 2 }))?;
                seq.serialize_element(&point.x)?;
                seq.serialize_element(&point.y)?;
                if let Some(z) = point.z {
                    seq.serialize_element(&z)?;
                }
                seq.end()
            }
            CoordinateTree::Branch(children) => {
                let mut seq = serializer.serialize_seq(Some(children.len()))?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for CoordinateTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        CoordinateTree::from_value(&value).map_err(de::Error::custom)
    }
}
