use super::{Point, Segment};
use crate::core::traits::ExactNum;
use num_rational::Ratio;
use num_traits::Zero;

/// Side of a directed line that a point lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// Point is left of the direction of travel (counter clockwise).
    Left,
    /// Point is right of the direction of travel (clockwise).
    Right,
    /// Point is on the infinite line.
    Collinear,
}

/// Returns which side of the infinite line through `seg` (directed `start -> end`) `point` is on.
///
/// # Examples
///
/// ```
/// # use closed_fences::core::math::*;
/// let seg = Segment::new(point(0, 0), point(1, 1));
/// assert_eq!(side_of(&point(0, 1), &seg), Side::Left);
/// assert_eq!(side_of(&point(0, 2), &seg), Side::Left);
/// assert_eq!(side_of(&point(1, 0), &seg), Side::Right);
/// assert_eq!(side_of(&point(5, 5), &seg), Side::Collinear);
/// ```
#[inline]
pub fn side_of<T>(point: &Point<T>, seg: &Segment<T>) -> Side
where
    T: ExactNum,
{
    let cross = seg.direction().perp_dot(&(point - &seg.start));
    if cross.is_positive() {
        Side::Left
    } else if cross.is_negative() {
        Side::Right
    } else {
        Side::Collinear
    }
}

/// Returns true if `point` lies on the segment `seg`, endpoints included.
///
/// The point must be on the infinite line (`n x d = 0` with `n = point - start` and
/// `d = end - start`) and its projection must land within the segment (`0 <= n . d <= d . d`).
/// No division is performed so vertical, horizontal and reverse oriented segments are all handled
/// the same way. A zero length segment only contains its own point.
///
/// # Examples
///
/// ```
/// # use closed_fences::core::math::*;
/// let seg = Segment::new(point(2, 2), point(0, 0));
/// assert!(point_on_segment(&point(1, 1), &seg));
/// assert!(point_on_segment(&point(0, 0), &seg));
/// // on the infinite line but past the end
/// assert!(!point_on_segment(&point(3, 3), &seg));
/// assert!(!point_on_segment(&point(1, 0), &seg));
/// ```
pub fn point_on_segment<T>(point: &Point<T>, seg: &Segment<T>) -> bool
where
    T: ExactNum,
{
    let n = point - &seg.start;
    let d = seg.direction();

    if !n.perp_dot(&d).is_zero() {
        return false;
    }

    if d.is_zero() {
        return n.is_zero();
    }

    let projection = n.dot(&d);
    !projection.is_negative() && projection <= d.length_squared()
}

/// Exact ordering key for the angle between the direction vectors of `seg1` and `seg2`.
///
/// Equal to `sign(dot) * dot^2 / (|seg1|^2 * |seg2|^2)`, i.e. the squared cosine of the angle
/// carrying the sign of the cosine. It is monotonic in the cosine so ordering by it is the same as
/// ordering by `cos(angle)` while staying exact (no square roots). Returns zero if either segment
/// has zero length.
///
/// # Examples
///
/// ```
/// # use closed_fences::core::math::*;
/// # use num_rational::Ratio;
/// let sight = Segment::new(point(0, 0), point(2, 0));
/// let along = Segment::new(point(2, 0), point(4, 0));
/// let diagonal = Segment::new(point(2, 0), point(3, 1));
/// let back = Segment::new(point(2, 0), point(1, 1));
/// assert_eq!(grazing_angle_key(&sight, &along), Ratio::new(1, 1));
/// assert_eq!(grazing_angle_key(&sight, &diagonal), Ratio::new(1, 2));
/// assert_eq!(grazing_angle_key(&sight, &back), Ratio::new(-1, 2));
/// ```
pub fn grazing_angle_key<T>(seg1: &Segment<T>, seg2: &Segment<T>) -> Ratio<T>
where
    T: ExactNum,
{
    let a = seg1.direction();
    let b = seg2.direction();
    let denom = a.length_squared() * b.length_squared();
    if denom.is_zero() {
        return Ratio::zero();
    }

    let dot = a.dot(&b);
    let key = Ratio::new(dot.clone() * dot.clone(), denom);
    if dot.is_negative() {
        -key
    } else {
        key
    }
}
