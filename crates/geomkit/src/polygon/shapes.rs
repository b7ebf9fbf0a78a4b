//! Quadrilateral presets.
//!
//! Each preset is a `Polygon` with `n = 4` and a kind tag. No right-angle,
//! equal-side or parallel-side check is made; callers supply consistent
//! vertices.

use std::fmt;
use std::str::FromStr;

use super::Polygon;
use crate::cfg::QUAD_VERTICES;
use crate::error::{GeomError, Result};
use crate::point::Point;
use crate::scalar::Scalar;

/// Label attached to a polygon at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[default]
    Polygon,
    Rectangle,
    Rhombus,
    Trapezoid,
}

impl ShapeKind {
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Polygon => "polygon",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Rhombus => "rhombus",
            ShapeKind::Trapezoid => "trapezoid",
        }
    }

    /// Fixed vertex count of the preset; `None` for a general polygon.
    pub fn fixed_vertex_count(self) -> Option<usize> {
        match self {
            ShapeKind::Polygon => None,
            _ => Some(QUAD_VERTICES),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "polygon" => Ok(ShapeKind::Polygon),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "rhombus" => Ok(ShapeKind::Rhombus),
            "trapezoid" => Ok(ShapeKind::Trapezoid),
            other => Err(GeomError::parse(format!("unknown shape kind {other:?}"))),
        }
    }
}

pub fn rectangle<T: Scalar>() -> Polygon<T> {
    preset(ShapeKind::Rectangle)
}

pub fn rhombus<T: Scalar>() -> Polygon<T> {
    preset(ShapeKind::Rhombus)
}

pub fn trapezoid<T: Scalar>() -> Polygon<T> {
    preset(ShapeKind::Trapezoid)
}

fn preset<T: Scalar>(kind: ShapeKind) -> Polygon<T> {
    Polygon::with_kind(vec![Point::origin(); QUAD_VERTICES], kind)
}

/// Preset by kind; `ShapeKind::Polygon` has no fixed size and is rejected.
pub fn quad<T: Scalar>(kind: ShapeKind) -> Result<Polygon<T>> {
    match kind.fixed_vertex_count() {
        Some(_) => Ok(preset(kind)),
        None => Err(GeomError::invalid(
            "a general polygon has no preset vertex count",
        )),
    }
}

/// Preset by kind with its four vertices filled in.
pub fn quad_from<T: Scalar>(
    kind: ShapeKind,
    vertices: [Point<T>; QUAD_VERTICES],
) -> Result<Polygon<T>> {
    let mut p = quad(kind)?;
    p.vertices.copy_from_slice(&vertices);
    Ok(p)
}
