use crate::core::traits::ExactNum;
use std::{fmt, ops};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact 2D point (or direction vector) with integer coordinates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point<T = i64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T>
where
    T: ExactNum,
{
    /// Create a new point with x and y coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Create the origin point (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Point::new(T::zero(), T::zero())
    }

    /// Returns true if both coordinates are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Uniformly scale the point by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        Point::new(
            scale_factor.clone() * self.x.clone(),
            scale_factor * self.y.clone(),
        )
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x.clone() * other.x.clone() + self.y.clone() * other.y.clone()
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> T {
        self.x.clone() * other.y.clone() - self.y.clone() * other.x.clone()
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T> From<(T, T)> for Point<T>
where
    T: ExactNum,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Point::new(x, y)
    }
}

impl<T> fmt::Display for Point<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

/// Shorthand for [Point::new].
#[inline(always)]
pub fn point<T>(x: T, y: T) -> Point<T>
where
    T: ExactNum,
{
    Point::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: ExactNum> ops::$op_trait<Point<T>> for Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: ExactNum> ops::$op_trait<&Point<T>> for Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: &Point<T>) -> Self::Output {
                Point::new(self.x $op rhs.x.clone(), self.y $op rhs.y.clone())
            }
        }

        impl<'a, 'b, T: ExactNum> ops::$op_trait<&'b Point<T>> for &'a Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: &'b Point<T>) -> Self::Output {
                Point::new(self.x.clone() $op rhs.x.clone(), self.y.clone() $op rhs.y.clone())
            }
        }

        impl<T: ExactNum> ops::$op_trait<Point<T>> for &Point<T> {
            type Output = Point<T>;
            fn $op_func(self, rhs: Point<T>) -> Self::Output {
                Point::new(self.x.clone() $op rhs.x, self.y.clone() $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: ExactNum> ops::Neg for Point<T> {
    type Output = Point<T>;
    fn neg(self) -> Self::Output {
        Point::new(-self.x, -self.y)
    }
}

impl<T: ExactNum> ops::Neg for &Point<T> {
    type Output = Point<T>;
    fn neg(self) -> Self::Output {
        Point::new(-self.x.clone(), -self.y.clone())
    }
}

impl<T: ExactNum> ops::Mul<T> for Point<T> {
    type Output = Point<T>;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: ExactNum> ops::Mul<T> for &Point<T> {
    type Output = Point<T>;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}
