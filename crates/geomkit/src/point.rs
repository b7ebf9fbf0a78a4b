//! 2D coordinate pair over a primitive scalar.
//!
//! - Equality is tolerance-based (`cfg::POINT_EPS`) for float coordinates and
//!   exact for integer coordinates.
//! - Text form is `(x, y)` with no surrounding whitespace.
//! - Geometry code converts to `nalgebra::Vector2<f64>` via `to_vec2`.

use std::fmt;

use nalgebra::Vector2;

use crate::cfg::POINT_EPS;
use crate::error::{GeomError, Result};
use crate::scalar::Scalar;
use crate::stream::Tokens;

/// A point in the plane. Default is the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn origin() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Widen to an `f64` vector for area and centroid math.
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x.as_(), self.y.as_())
    }

    #[inline]
    pub fn to_f64(self) -> Point<f64> {
        Point::new(self.x.as_(), self.y.as_())
    }

    /// Read one `x y` pair from a token stream.
    pub fn read_from(tokens: &mut Tokens<'_>) -> Result<Self> {
        let x = tokens.next_scalar::<T>()?;
        let y = tokens.next_scalar::<T>()?;
        Ok(Self { x, y })
    }
}

/// Integers differ by at least 1 when unequal, so they compare exactly; wide
/// integers would lose precision in `f64`.
#[inline]
fn near<T: Scalar>(a: T, b: T) -> bool {
    if T::INTEGRAL {
        return a == b;
    }
    let d: f64 = a.as_() - b.as_();
    d.abs() <= POINT_EPS
}

impl<T: Scalar> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        near(self.x, other.x) && near(self.y, other.y)
    }
}

impl<T: Scalar> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point<f64> {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: Scalar> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> std::str::FromStr for Point<T> {
    type Err = GeomError;

    /// Accepts `x y` or the display form `(x, y)`.
    fn from_str(s: &str) -> Result<Self> {
        let cleaned: String = s
            .chars()
            .map(|c| if matches!(c, '(' | ')' | ',') { ' ' } else { c })
            .collect();
        let mut tokens = Tokens::new(cleaned.as_bytes());
        let p = Self::read_from(&mut tokens)?;
        if tokens.next_token()?.is_some() {
            return Err(GeomError::parse(format!("trailing input in point {s:?}")));
        }
        Ok(p)
    }
}
