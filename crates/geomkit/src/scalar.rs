//! Scalar constraint for generic coordinates.
//!
//! `Scalar` is sealed: only the primitive integer and float types implement
//! it, so `Point<String>` or `Point<Vec<i32>>` do not type-check.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{AsPrimitive, Num};

mod sealed {
    pub trait Sealed {}
}

/// Primitive numeric coordinate type.
///
/// Geometry is evaluated in `f64` through `AsPrimitive`, so integer
/// coordinates never overflow in the shoelace sum.
pub trait Scalar:
    sealed::Sealed
    + Num
    + Copy
    + PartialOrd
    + Default
    + Debug
    + Display
    + FromStr
    + AsPrimitive<f64>
    + 'static
{
    /// Integer types compare exactly; floats use a tolerance.
    const INTEGRAL: bool;
}

macro_rules! impl_scalar {
    ($integral:expr => $($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Scalar for $t {
                const INTEGRAL: bool = $integral;
            }
        )*
    };
}

impl_scalar!(true => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar!(false => f32, f64);
