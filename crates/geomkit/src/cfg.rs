//! Fixed defaults and tolerances (internal).
//!
//! Policy
//! - Defaults are constants rather than runtime knobs; the toolkit has no
//!   environment or file configuration. Call sites import what they need.

/// Coordinate tolerance used by `Point` equality.
pub const POINT_EPS: f64 = 1e-6;
/// Capacity of a freshly constructed `DynamicArray`.
pub const DEFAULT_CAPACITY: usize = 16;
/// Smallest vertex count that encloses an area.
pub const MIN_VERTICES: usize = 3;
/// Vertex count of the quadrilateral presets.
pub const QUAD_VERTICES: usize = 4;
/// Absolute tolerance for area-based figure comparison.
pub const AREA_EPS: f64 = 1e-9;
