//! Numeric element types.
//!
//! [`Number`] bounds the arithmetic aggregates [`sum`](crate::seq::sum),
//! [`product`](crate::seq::product), [`min`](crate::seq::min) and
//! [`max`](crate::seq::max). It is implemented for every primitive integer
//! and floating-point type.
//!
//! Integer sums and products wrap around on overflow, in debug and release
//! builds alike, so an aggregate never panics on a non-empty input. Floats
//! use their native arithmetic.

/// A primitive numeric type that the arithmetic aggregates accept.
///
/// Floats are ordered with [`PartialOrd`]. See [`seq::try_min`](crate::seq::try_min)
/// for how a `NaN` is treated.
pub trait Number: Copy + PartialOrd {
    /// Adds `rhs`, wrapping around at the bounds of an integer type.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Multiplies by `rhs`, wrapping around at the bounds of an integer type.
    fn wrapping_mul(self, rhs: Self) -> Self;
}

macro_rules! int_impls {
    ($($int_ty:ty)*) => {
        $(
            impl Number for $int_ty {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$int_ty>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$int_ty>::wrapping_mul(self, rhs)
                }
            }
        )*
    };
}

macro_rules! float_impls {
    ($($float_ty:ty)*) => {
        $(
            impl Number for $float_ty {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

int_impls!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
float_impls!(f32 f64);
