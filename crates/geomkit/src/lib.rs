//! Small generic geometry toolkit.
//!
//! - `DynamicArray<T>`: growable, bounds-checked sequence with capacity doubling.
//! - `Point<T>`, `Scalar`: coordinates over primitive numeric types.
//! - `Figure`: area / center / text read-write capability, object-safe.
//! - `Polygon<T>`: shoelace area, vertex-mean center; quadrilateral presets
//!   (`rectangle`, `rhombus`, `trapezoid`) are constructors, not subtypes.
//!
//! Errors are returned as `GeomError` and never logged here.

pub mod array;
pub mod cfg;
pub mod error;
pub mod figure;
pub mod point;
pub mod polygon;
pub mod scalar;
pub mod stream;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use array::DynamicArray;
pub use error::{GeomError, Result};
pub use figure::{total_area, Figure};
pub use point::Point;
pub use polygon::{quad, quad_from, rectangle, rhombus, trapezoid, Polygon, ShapeKind};
pub use scalar::Scalar;
pub use stream::Tokens;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::array::DynamicArray;
    pub use crate::error::GeomError;
    pub use crate::figure::{total_area, Figure};
    pub use crate::point::Point;
    pub use crate::polygon::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::polygon::{
        quad, quad_from, rectangle, rhombus, trapezoid, Polygon, ShapeKind,
    };
    pub use crate::stream::Tokens;
}
