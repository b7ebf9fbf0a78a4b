//! Figure capability: area, centroid, text read/write, numeric conversion.
//!
//! - Object-safe, so heterogeneous collections use `Rc<dyn Figure>` or
//!   `Box<dyn Figure>`; both handle types implement `Figure` themselves.
//! - Stream-write is `Display`; stream-read consumes tokens from `Tokens`.
//! - `Debug` is required so collections of handles can be inspected.

use std::fmt;
use std::rc::Rc;

use crate::cfg::AREA_EPS;
use crate::error::{GeomError, Result};
use crate::point::Point;
use crate::stream::Tokens;

/// A planar figure.
///
/// Implementors provide `calculate_center`; callers go through `center`.
pub trait Figure: fmt::Display + fmt::Debug {
    /// Enclosed area, never negative.
    fn area(&self) -> f64;

    /// Centroid computation backing `center`.
    fn calculate_center(&self) -> Result<Point<f64>>;

    /// Overwrite the figure's coordinates from a token stream.
    fn read_from(&mut self, tokens: &mut Tokens<'_>) -> Result<()>;

    fn center(&self) -> Result<Point<f64>> {
        self.calculate_center()
    }

    /// Explicit numeric conversion: the area.
    fn as_f64(&self) -> f64 {
        self.area()
    }

    /// Short human label ("polygon", "rectangle", ...).
    fn label(&self) -> &'static str {
        "figure"
    }

    /// Area-only comparison; different shapes of equal area compare equal.
    fn same_area(&self, other: &dyn Figure) -> bool {
        (self.area() - other.area()).abs() <= AREA_EPS
    }

    fn read_str(&mut self, input: &str) -> Result<()> {
        self.read_from(&mut Tokens::from(input))
    }
}

impl<F: Figure + ?Sized> Figure for Box<F> {
    fn area(&self) -> f64 {
        (**self).area()
    }
    fn calculate_center(&self) -> Result<Point<f64>> {
        (**self).calculate_center()
    }
    fn read_from(&mut self, tokens: &mut Tokens<'_>) -> Result<()> {
        (**self).read_from(tokens)
    }
    fn label(&self) -> &'static str {
        (**self).label()
    }
}

/// Reading requires the only handle; a shared figure is `InvalidState`.
impl<F: Figure + ?Sized> Figure for Rc<F> {
    fn area(&self) -> f64 {
        (**self).area()
    }
    fn calculate_center(&self) -> Result<Point<f64>> {
        (**self).calculate_center()
    }
    fn read_from(&mut self, tokens: &mut Tokens<'_>) -> Result<()> {
        Rc::get_mut(self)
            .ok_or_else(|| GeomError::state("cannot read into a shared figure"))?
            .read_from(tokens)
    }
    fn label(&self) -> &'static str {
        (**self).label()
    }
}

/// Sum of areas over any collection of figures.
pub fn total_area<'a, F, I>(figures: I) -> f64
where
    F: Figure + ?Sized + 'a,
    I: IntoIterator<Item = &'a F>,
{
    figures.into_iter().map(|f| f.area()).sum()
}
