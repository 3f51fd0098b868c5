//! Scalar abstraction over `{f32, f64}`.

use std::fmt::Display;
use std::str::FromStr;

/// Trait for floating-point types, so that the rest of the crate can be
/// generic over {f32, f64} without weird macros at every use site.
///
/// The `FromStr`/`Display` bounds exist because scalars cross the text
/// format boundary in both directions, and `Display` round-trips through
/// `FromStr` for both primitive float types.
pub trait Float:
    num_traits::Float
    + nalgebra::Scalar
    + nalgebra::SimdPartialOrd
    + FromStr
    + Display
    + Copy
    + Send
    + Sync
{
    const ZERO: Self;
    const TWO: Self;
}

macro_rules! impl_float {
    ($($real:ty),*) => {$(
        impl Float for $real {
            const ZERO: Self = 0.0;
            const TWO: Self = 2.0;
        }
    )*};
}

impl_float! {f32, f64}
