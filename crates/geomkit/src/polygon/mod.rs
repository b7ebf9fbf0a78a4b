//! Simple polygons over generic scalar coordinates.
//!
//! Purpose
//! - `Polygon<T>` owns a fixed-length vertex buffer (`n >= 3`, chosen at
//!   construction) and implements `Figure`: shoelace area, vertex-mean center,
//!   `(x, y)`-per-line text output, token-stream input.
//! - The quadrilateral presets are constructors in `shapes`; they only fix
//!   `n = 4` and set the `ShapeKind` tag.
//!
//! Notes
//! - Winding is not validated: a self-intersecting vertex order yields a
//!   computable but meaningless area.
//! - `center` is the mean of the vertices, not the area-weighted centroid.

use std::fmt;

use nalgebra::Vector2;

use crate::cfg::MIN_VERTICES;
use crate::error::{GeomError, Result};
use crate::figure::Figure;
use crate::point::Point;
use crate::scalar::Scalar;
use crate::stream::Tokens;

pub mod rand;
mod shapes;

pub use shapes::{quad, quad_from, rectangle, rhombus, trapezoid, ShapeKind};

/// Polygon with an exclusively owned, fixed-size vertex buffer.
///
/// Invariant: the vertex count never changes after construction, except that
/// `take` leaves the source with zero vertices.
#[derive(Clone, Debug)]
pub struct Polygon<T: Scalar> {
    vertices: Box<[Point<T>]>,
    kind: ShapeKind,
}

impl<T: Scalar> Polygon<T> {
    /// `n` vertices at the origin. Fewer than 3 is rejected.
    pub fn new(n: usize) -> Result<Self> {
        check_vertex_count(n)?;
        Ok(Self::with_kind(vec![Point::origin(); n], ShapeKind::Polygon))
    }

    /// Polygon over the given vertices, in order.
    pub fn from_vertices(vertices: Vec<Point<T>>) -> Result<Self> {
        check_vertex_count(vertices.len())?;
        Ok(Self::with_kind(vertices, ShapeKind::Polygon))
    }

    pub(crate) fn with_kind(vertices: Vec<Point<T>>, kind: ShapeKind) -> Self {
        Self {
            vertices: vertices.into_boxed_slice(),
            kind,
        }
    }

    pub fn set_vertex(&mut self, index: usize, point: Point<T>) -> Result<()> {
        GeomError::check_index(index, self.vertices.len())?;
        self.vertices[index] = point;
        Ok(())
    }

    pub fn get_vertex(&self, index: usize) -> Result<Point<T>> {
        GeomError::check_index(index, self.vertices.len())?;
        Ok(self.vertices[index])
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Shoelace sum halved: positive for counter-clockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut twice = 0.0;
        for i in 0..n {
            let p = self.vertices[i].to_vec2();
            let q = self.vertices[(i + 1) % n].to_vec2();
            twice += p.x * q.y - q.x * p.y;
        }
        twice / 2.0
    }

    /// Move the vertex buffer out; `self` is left with zero vertices.
    pub fn take(&mut self) -> Self {
        Self {
            vertices: std::mem::take(&mut self.vertices),
            kind: self.kind,
        }
    }
}

#[inline]
fn check_vertex_count(n: usize) -> Result<()> {
    if n < MIN_VERTICES {
        return Err(GeomError::invalid(format!(
            "a polygon needs at least {MIN_VERTICES} vertices, got {n}"
        )));
    }
    Ok(())
}

impl<T: Scalar> Figure for Polygon<T> {
    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn calculate_center(&self) -> Result<Point<f64>> {
        if self.vertices.is_empty() {
            return Err(GeomError::state("polygon no longer owns its vertices"));
        }
        let sum: Vector2<f64> = self.vertices.iter().map(|p| p.to_vec2()).sum();
        Ok(Point::from(sum / self.vertices.len() as f64))
    }

    /// Reads exactly `vertex_count()` pairs; on error nothing is overwritten.
    fn read_from(&mut self, tokens: &mut Tokens<'_>) -> Result<()> {
        let mut scratch = Vec::with_capacity(self.vertices.len());
        for _ in 0..self.vertices.len() {
            scratch.push(Point::read_from(tokens)?);
        }
        self.vertices.copy_from_slice(&scratch);
        Ok(())
    }

    fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// One `(x, y)` line per vertex, or `Empty` once the buffer was taken.
impl<T: Scalar> fmt::Display for Polygon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertices.is_empty() {
            return write!(f, "Empty");
        }
        for v in self.vertices.iter() {
            writeln!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Vertex-wise with point tolerance; the kind tag is not compared.
impl<T: Scalar> PartialEq for Polygon<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<T: Scalar> From<&Polygon<T>> for f64 {
    fn from(p: &Polygon<T>) -> f64 {
        p.area()
    }
}
