//! Traits and implementations related to interpolation of animatable values.

use num_traits::FromPrimitive;

/// Trait for a type that supports the standard `lerp` (**l**inear int**erp**olation) operation.
///
/// `lerp(y0, y1, x) = y0 + x(y1 - y0)`, with `x` normalized so that _x0_ = 0 and _x1_ = 1.
///
/// All primitive numeric types are `lerp`able. The computation is performed in 32-bit
/// floating-point arithmetic, so interpolating a narrower type (e.g. `u32`) or a wider one (`f64`)
/// may lose some precision. Any type composed entirely of numeric values can implement the trait
/// by `lerp`ing each of its components; [`Rgba`](crate::color::Rgba) does exactly that.
pub trait Lerp {
    /// Computes the linear interpolation between this value (`y0`) and a second (`y1`) value of the
    /// same type, at normalized (from 0 to 1) position `x`.
    ///
    /// # Panics
    ///
    /// The default implementation for integer primitives will panic if `self` or `y1` are too
    /// large to fit in an `f32`, or if the resulting interpolated value is out of bounds for the
    /// `y` type.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_core::interpolation::Lerp;
    ///
    /// let y0: f32 = 10.0;
    /// let y1: f32 = 20.0;
    ///
    /// assert_eq!(y0.lerp(&y1, 0.0), 10.0);
    /// assert_eq!(y0.lerp(&y1, 0.5), 15.0);
    /// assert_eq!(y0.lerp(&y1, 1.0), 20.0);
    /// ```
    fn lerp(&self, y1: &Self, x: f32) -> Self;
}

// The lerp equation is computed as `tb + (1 - t)a` rather than `a + t(b - a)`: the latter does its
// addition and subtraction in the value's own space, which can overflow near the boundaries of
// narrow integer types (e.g. an i8 interpolating from -128 to 127). The floating-point form only
// requires the final result to fit.

macro_rules! impl_lerp_for_integer_types {
    ($($t:ty),*) => {
        $( impl Lerp for $t {
            fn lerp(&self, y1: &Self, x: f32) -> Self {
                let result_f32 = (*self as f32).lerp(&(*y1 as f32), x);
                Self::from_f32(result_f32.round())
                    .expect("Converted value was outside the valid range for this type.")
            }
        }) *
    }
}

impl_lerp_for_integer_types! { i8, i16, i32, i64, u8, u16, u32, u64, usize }

impl Lerp for f32 {
    fn lerp(&self, y1: &Self, x: f32) -> Self {
        self * (1.0 - x) + y1 * x
    }
}

impl Lerp for f64 {
    fn lerp(&self, y1: &Self, x: f32) -> Self {
        (*self as f32 * (1.0 - x) + *y1 as f32 * x) as f64
    }
}
