use num_integer::Integer;
use num_traits::Signed;

/// Trait representing an exact signed integer coordinate type (e.g. `i64`, `i128`,
/// `num_bigint::BigInt`).
///
/// All intersection parameters and angle keys are computed as [num_rational::Ratio] values over
/// this type so no rounding ever takes place. Fixed width integers must keep coordinates small
/// enough that the largest intermediate product fits: the angle key multiplies four coordinate
/// differences together, so with `|coordinate| <= B` the products reach `64 * B^4`. That bounds
/// `i32` coordinates to ±64, `i64` coordinates to ±16384 and `i128` coordinates to ±10^9. Use
/// `BigInt` when coordinates may exceed these.
pub trait ExactNum:
    Integer + Signed + Clone + std::fmt::Debug + std::fmt::Display + 'static
{
}

impl<T> ExactNum for T where
    T: Integer + Signed + Clone + std::fmt::Debug + std::fmt::Display + 'static
{
}
