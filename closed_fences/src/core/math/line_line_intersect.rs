use super::{point_on_segment, Segment};
use crate::core::traits::ExactNum;
use num_rational::Ratio;
use num_traits::{One, Zero};

/// Holds the result of classifying two line segments against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentIntr<T>
where
    T: ExactNum,
{
    /// No intersect, segments are parallel and not overlapping.
    NoIntersect,
    /// Segments are collinear and share at least one point (touching end to end included).
    IntersectAsSubset,
    /// The infinite lines through the segments cross at exactly one point. The parametric values
    /// may lie outside `[0, 1]` in which case the crossing is off that segment.
    Intersect {
        /// Parametric value for intersect on first segment.
        t: Ratio<T>,
        /// Parametric value for intersect on second segment.
        s: Ratio<T>,
    },
}

impl<T> SegmentIntr<T>
where
    T: ExactNum,
{
    /// Returns true if the segments themselves (not their extensions) share a point.
    pub fn is_bounded(&self) -> bool {
        match self {
            SegmentIntr::NoIntersect => false,
            SegmentIntr::IntersectAsSubset => true,
            SegmentIntr::Intersect { t, s } => in_unit_range(t) && in_unit_range(s),
        }
    }
}

#[inline]
fn in_unit_range<T>(value: &Ratio<T>) -> bool
where
    T: ExactNum,
{
    *value >= Ratio::zero() && *value <= Ratio::one()
}

/// Classifies two line segments against each other.
///
/// This function returns the parametric solution using the general line segment equation
/// `P(t) = p0 + t * (p1 - p0)` for both segments, solving
/// `seg1.start + t * (seg1.end - seg1.start) = seg2.start + s * (seg2.end - seg2.start)`.
/// All arithmetic is exact, `t` and `s` are reduced fractions.
///
/// # Explanation on result cases [SegmentIntr]
/// ## `NoIntersect`
/// Either of the following cases:
/// * Segments are parallel and not collinear
/// * Segments are collinear but do not share any point
/// * Segments are points (or one is a point) and distinct from each other
///
/// ## `IntersectAsSubset`
/// Either of the following cases:
/// * Segments are collinear and overlap or touch end to end
/// * One or both segments are points lying on the other
///
/// ## `Intersect`
/// Segments are not parallel. Returned regardless of whether the crossing is within the segments,
/// callers decide by testing `t` and `s` against `[0, 1]` (see [SegmentIntr::is_bounded]).
///
/// # Examples
///
/// ```
/// # use closed_fences::core::math::*;
/// # use num_rational::Ratio;
/// let seg1 = Segment::new(point(0, 0), point(2, 2));
/// let seg2 = Segment::new(point(0, 2), point(2, 0));
/// assert_eq!(
///     classify(&seg1, &seg2),
///     SegmentIntr::Intersect { t: Ratio::new(1, 2), s: Ratio::new(1, 2) }
/// );
///
/// let seg3 = Segment::new(point(2, 2), point(3, 3));
/// assert_eq!(classify(&seg1, &seg3), SegmentIntr::IntersectAsSubset);
/// ```
pub fn classify<T>(seg1: &Segment<T>, seg2: &Segment<T>) -> SegmentIntr<T>
where
    T: ExactNum,
{
    // perpendicular products of the direction vectors
    // http://geomalgorithms.com/a05-_intersect-1.html

    use SegmentIntr::*;

    let v = seg1.direction();
    let u = seg2.direction();
    let w = &seg2.start - &seg1.start;
    let det = v.perp_dot(&u);

    if !det.is_zero() {
        let t = Ratio::new(w.perp_dot(&u), det.clone());
        let s = Ratio::new(w.perp_dot(&v), det);
        return Intersect { t, s };
    }

    // parallel, a point segment is collinear with any line through it
    let collinear = v.is_zero() || v.perp_dot(&w).is_zero();
    if !collinear {
        return NoIntersect;
    }

    let overlapping = point_on_segment(&seg2.start, seg1)
        || point_on_segment(&seg2.end, seg1)
        || point_on_segment(&seg1.start, seg2)
        || point_on_segment(&seg1.end, seg2);

    if overlapping {
        IntersectAsSubset
    } else {
        NoIntersect
    }
}

/// Returns true if the two segments share at least one point (endpoints included).
///
/// # Examples
///
/// ```
/// # use closed_fences::core::math::*;
/// let seg1 = Segment::new(point(0, 0), point(1, 1));
/// // crossing found only by extending seg1
/// let seg2 = Segment::new(point(5, 5), point(-5, 5));
/// assert!(!segments_intersect(&seg1, &seg2));
/// // touching at a single end point
/// let seg3 = Segment::new(point(1, 1), point(1, -3));
/// assert!(segments_intersect(&seg1, &seg3));
/// ```
#[inline]
pub fn segments_intersect<T>(seg1: &Segment<T>, seg2: &Segment<T>) -> bool
where
    T: ExactNum,
{
    classify(seg1, seg2).is_bounded()
}
