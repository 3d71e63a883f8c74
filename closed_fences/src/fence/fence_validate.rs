use super::{FenceValidateOptions, FenceValidation};
use crate::core::{
    math::{segments_intersect, Point, Segment},
    traits::ExactNum,
};

/// Validate that `vertexes` (implicitly closed) form a simple fence using default options.
///
/// See [validate_fence_opt].
///
/// # Examples
///
/// ```
/// # use closed_fences::core::math::*;
/// # use closed_fences::fence::*;
/// let square = [point(0, 0), point(1, 0), point(1, 1), point(0, 1)];
/// assert!(validate_fence(&square).is_valid());
///
/// let bow_tie = [point(0, 0), point(2, 0), point(2, 2), point(1, -1)];
/// assert!(!validate_fence(&bow_tie).is_valid());
/// ```
#[inline]
pub fn validate_fence<T>(vertexes: &[Point<T>]) -> FenceValidation
where
    T: ExactNum,
{
    validate_fence_opt(vertexes, &Default::default())
}

/// Validate that `vertexes` (implicitly closed) form a simple fence using the options given.
///
/// Edges are placed in order (vertex `i` to vertex `i + 1`), each new edge must not fold back over
/// the edge before it and must not share any point with earlier edges. The closing edge (last
/// vertex back to the first) is then checked against every edge except its two neighbors, and its
/// neighbors' far vertexes must not lie on it.
///
/// Never panics, every problem is reported through the returned [FenceValidation].
pub fn validate_fence_opt<T>(
    vertexes: &[Point<T>],
    options: &FenceValidateOptions,
) -> FenceValidation
where
    T: ExactNum,
{
    let vertex_count = vertexes.len();
    if vertex_count < options.min_vertex_count() {
        return rejected(FenceValidation::TooFewVertices {
            count: vertex_count,
        });
    }

    let mut placed: Vec<Segment<T>> = Vec::with_capacity(vertex_count - 1);

    for (edge_index, pair) in vertexes.windows(2).enumerate() {
        let new_edge = Segment::new(pair[0].clone(), pair[1].clone());

        if let Some(prev_edge) = placed.last() {
            if prev_edge.contains(&new_edge.end) || new_edge.contains(&prev_edge.start) {
                return rejected(FenceValidation::Backtrack { edge_index });
            }
        }

        // the previous edge shares exactly the joining vertex with the new edge
        let earlier_count = placed.len().saturating_sub(1);
        let crossed = placed[..earlier_count]
            .iter()
            .position(|edge| segments_intersect(edge, &new_edge));

        if let Some(other_index) = crossed {
            return rejected(FenceValidation::Crossing {
                edge_index,
                other_index,
            });
        }

        placed.push(new_edge);
    }

    let closing_index = vertex_count - 1;
    let closing_edge = Segment::new(vertexes[closing_index].clone(), vertexes[0].clone());

    for vertex_index in [1, vertex_count - 2] {
        if closing_edge.contains(&vertexes[vertex_index]) {
            return rejected(FenceValidation::ClosingEdgeTouch { vertex_index });
        }
    }

    // skip first and last placed edges, they are adjacent to the closing edge
    let crossed = placed[1..placed.len() - 1]
        .iter()
        .position(|edge| segments_intersect(edge, &closing_edge));

    if let Some(i) = crossed {
        return rejected(FenceValidation::Crossing {
            edge_index: closing_index,
            other_index: i + 1,
        });
    }

    FenceValidation::Valid
}

#[inline]
fn rejected(result: FenceValidation) -> FenceValidation {
    log::debug!("fence rejected: {}", result);
    result
}
