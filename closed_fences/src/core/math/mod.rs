//! Exact 2D math: points, directed segments, side and containment tests, and segment
//! intersection classification.
mod base_math;
mod line_line_intersect;
mod point;
mod segment;

pub use base_math::*;
pub use line_line_intersect::{classify, segments_intersect, SegmentIntr};
pub use point::{point, Point};
pub use segment::Segment;
