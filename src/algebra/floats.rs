#![allow(non_snake_case)]
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types used in problem data, candidate
/// solutions and result records.
///
/// Implemented for any type satisfying the bounds, which in practice means
/// f32 and f64.  `FloatT` relies on [`num_traits`](num_traits) for most of
/// its constituent trait bounds.  Types shared across benchmark threads must
/// be `Send + Sync`.
pub trait FloatT:
    'static
    + Send
    + Sync
    + Float
    + FloatConst
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + FloatConst
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// Used for tolerance constants, so that we can write `(1e-3).as_T()`
/// rather than `T::from_f64(1e-3).unwrap()` everywhere.
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: FloatT,
        {
            #[inline]
            fn as_T(&self) -> T {
                // every FloatT can represent these primitives, possibly
                // with rounding, so the conversion never fails
                T::$ident(*self).unwrap_or_else(T::nan)
            }
        }
    };
}
impl_as_FloatT!(u32, from_u32);
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);

#[test]
fn test_as_float() {
    let a: f64 = (1e-3).as_T();
    assert_eq!(a, 1e-3);
    let b: f32 = (2u32).as_T();
    assert_eq!(b, 2.0f32);
}
