use super::{point_on_segment, side_of, Point, Side};
use crate::core::traits::ExactNum;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Directed line segment going from `start` to `end`.
///
/// Parametric positions along the segment follow `P(t) = start + t * (end - start)`, so `t = 0`
/// is `start` and `t = 1` is `end`. A segment and its [reverse](Segment::reverse) cover the same
/// points but swap which endpoint is `t = 0`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Segment<T = i64> {
    pub start: Point<T>,
    pub end: Point<T>,
}

impl<T> Segment<T>
where
    T: ExactNum,
{
    #[inline]
    pub fn new(start: Point<T>, end: Point<T>) -> Self {
        Segment { start, end }
    }

    /// Same segment with `start` and `end` swapped.
    #[inline]
    pub fn reverse(&self) -> Self {
        Segment::new(self.end.clone(), self.start.clone())
    }

    /// Direction vector `end - start`.
    #[inline]
    pub fn direction(&self) -> Point<T> {
        &self.end - &self.start
    }

    /// Returns true if the segment has zero length.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `point` lies on the segment (endpoints included), see [point_on_segment].
    #[inline]
    pub fn contains(&self, point: &Point<T>) -> bool {
        point_on_segment(point, self)
    }

    /// Side of the directed segment's infinite line that `point` lies on, see [side_of].
    #[inline]
    pub fn side_of(&self, point: &Point<T>) -> Side {
        side_of(point, self)
    }
}

impl<T> From<(Point<T>, Point<T>)> for Segment<T>
where
    T: ExactNum,
{
    #[inline]
    fn from((start, end): (Point<T>, Point<T>)) -> Self {
        Segment::new(start, end)
    }
}

impl<T> fmt::Display for Segment<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment({}, {})", self.start, self.end)
    }
}
