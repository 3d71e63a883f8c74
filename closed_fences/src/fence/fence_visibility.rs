use super::fence_edges;
use crate::core::{
    math::{classify, grazing_angle_key, Point, Segment, SegmentIntr, Side},
    traits::ExactNum,
};
use num_rational::Ratio;
use num_traits::{One, Signed, Zero};

/// Candidate edge hit by a sight line.
///
/// Field order is the ranking order: nearest first (parametric distance along the sight line),
/// then the edge turned furthest back toward the eye (smallest grazing angle key), then lowest
/// edge index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SightHit<T>
where
    T: ExactNum,
{
    dist: Ratio<T>,
    angle_key: Ratio<T>,
    edge_index: usize,
}

#[inline]
fn keep_nearest<T>(current: &mut Option<SightHit<T>>, hit: SightHit<T>)
where
    T: ExactNum,
{
    if current.as_ref().map_or(true, |c| hit < *c) {
        *current = Some(hit);
    }
}

/// Determine which edges of the fence given by `vertexes` are (fully or partially) visible from
/// `eye`.
///
/// Returns one flag per edge, edge `i` goes from vertex `i` to vertex `(i + 1) % N`. Fewer than
/// three vertexes never have visible edges.
///
/// A sight line is cast from `eye` to every vertex and classified against every edge. Edges hit
/// at or beyond the eye are split into two candidate groups, those on the left of the sight line
/// and those on the right. An edge whose interior is crossed belongs to both groups. An edge that
/// is only touched at one of its end points belongs to the group on the side of its other end
/// point (edges lying along the sight line belong to neither). The nearest edge of each group is
/// visible; among edges touched at the same point the one with the smallest
/// [grazing_angle_key] wins.
///
/// Results are only meaningful for simple fences, see
/// [validate_fence](super::validate_fence). Cost is O(N²).
///
/// # Examples
///
/// ```
/// # use closed_fences::core::math::*;
/// # use closed_fences::fence::*;
/// let fence = [point(0, 0), point(2, 0), point(2, 2), point(0, 2), point(1, 1)];
/// assert_eq!(
///     visible_edges(&point(0, 1), &fence),
///     vec![false, false, false, true, true]
/// );
/// ```
pub fn visible_edges<T>(eye: &Point<T>, vertexes: &[Point<T>]) -> Vec<bool>
where
    T: ExactNum,
{
    let vertex_count = vertexes.len();
    let mut visible = vec![false; vertex_count];
    if vertex_count < 3 {
        return visible;
    }

    let edges: Vec<Segment<T>> = fence_edges(vertexes).collect();

    for (vertex_index, target) in vertexes.iter().enumerate() {
        let sight = Segment::new(eye.clone(), target.clone());
        let (left, right) = nearest_hits(&sight, &edges);

        if let Some(hit) = left {
            log::trace!(
                "sight line to vertex {}: left edge {} at {}",
                vertex_index,
                hit.edge_index,
                hit.dist
            );
            visible[hit.edge_index] = true;
        }

        if let Some(hit) = right {
            log::trace!(
                "sight line to vertex {}: right edge {} at {}",
                vertex_index,
                hit.edge_index,
                hit.dist
            );
            visible[hit.edge_index] = true;
        }
    }

    visible
}

/// Nearest (left, right) edge hits along `sight`.
fn nearest_hits<T>(
    sight: &Segment<T>,
    edges: &[Segment<T>],
) -> (Option<SightHit<T>>, Option<SightHit<T>>)
where
    T: ExactNum,
{
    let zero = Ratio::<T>::zero();
    let one = Ratio::<T>::one();

    let mut left = None;
    let mut right = None;

    for (edge_index, edge) in edges.iter().enumerate() {
        // t is along the edge, s is along the sight line
        let (t, s) = match classify(edge, sight) {
            SegmentIntr::Intersect { t, s } => (t, s),
            _ => continue,
        };

        if s.is_negative() || t < zero || t > one {
            continue;
        }

        if t > zero && t < one {
            // sight line passes through the edge interior, blocks both sides
            let hit = SightHit {
                dist: s,
                angle_key: Ratio::zero(),
                edge_index,
            };
            keep_nearest(&mut left, hit.clone());
            keep_nearest(&mut right, hit);
            continue;
        }

        // sight line touches an edge end point, orient the edge away from the touched point
        let away = if t.is_zero() {
            edge.clone()
        } else {
            edge.reverse()
        };

        let hit = SightHit {
            dist: s,
            angle_key: grazing_angle_key(sight, &away),
            edge_index,
        };

        match sight.side_of(&away.end) {
            Side::Left => keep_nearest(&mut left, hit),
            Side::Right => keep_nearest(&mut right, hit),
            Side::Collinear => {}
        }
    }

    (left, right)
}
