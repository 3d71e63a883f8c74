use super::{validate_fence_opt, visible_edges, FenceValidateOptions, FenceValidation};
use crate::core::{
    math::{Point, Segment},
    traits::ExactNum,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// Iterate the edges of the implicitly closed fence given by `vertexes`.
///
/// Edge `i` goes from vertex `i` to vertex `(i + 1) % N`, so the last edge closes the fence back
/// to the first vertex. Yields nothing for an empty slice and a single zero length edge for one
/// vertex.
#[inline]
pub fn fence_edges<T>(vertexes: &[Point<T>]) -> impl Iterator<Item = Segment<T>> + '_
where
    T: ExactNum,
{
    let vertex_count = vertexes.len();
    vertexes.iter().enumerate().map(move |(i, v)| {
        let next = &vertexes[(i + 1) % vertex_count];
        Segment::new(v.clone(), next.clone())
    })
}

/// Closed fence (polygon) made of an ordered sequence of vertexes.
///
/// The last vertex implicitly connects back to the first, the first vertex is never repeated at
/// the end. Vertex order may be clockwise or counter clockwise.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fence<T = i64> {
    #[cfg_attr(feature = "serde", serde(rename = "vertexes"))]
    /// Contiguous sequence of vertexes.
    pub vertex_data: Vec<Point<T>>,
}

impl<T> Fence<T>
where
    T: ExactNum,
{
    /// Create a new empty [Fence].
    #[inline]
    pub fn new() -> Self {
        Fence {
            vertex_data: Vec::new(),
        }
    }

    /// Create a new empty [Fence] with vertex storage reserved for `capacity` vertexes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Fence {
            vertex_data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_vertexes(vertexes: Vec<Point<T>>) -> Self {
        Fence {
            vertex_data: vertexes,
        }
    }

    /// Add a vertex to the end of the fence.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.vertex_data.push(Point::new(x, y));
    }

    #[inline]
    pub fn add_point(&mut self, vertex: Point<T>) {
        self.vertex_data.push(vertex);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_data.is_empty()
    }

    #[inline]
    pub fn vertexes(&self) -> &[Point<T>] {
        &self.vertex_data
    }

    /// Edge starting at vertex `index`, `None` if `index` is out of bounds.
    #[inline]
    pub fn edge(&self, index: usize) -> Option<Segment<T>> {
        let start = self.vertex_data.get(index)?;
        let next = &self.vertex_data[(index + 1) % self.vertex_count()];
        Some(Segment::new(start.clone(), next.clone()))
    }

    /// Iterate all edges in order, see [fence_edges].
    #[inline]
    pub fn iter_edges(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        fence_edges(&self.vertex_data)
    }

    /// Validate the fence using default options, see [validate_fence](super::validate_fence).
    #[inline]
    pub fn validate(&self) -> FenceValidation {
        self.validate_opt(&Default::default())
    }

    #[inline]
    pub fn validate_opt(&self, options: &FenceValidateOptions) -> FenceValidation {
        validate_fence_opt(&self.vertex_data, options)
    }

    /// Visibility flag for every edge as seen from `eye`, see [visible_edges].
    #[inline]
    pub fn visible_edges(&self, eye: &Point<T>) -> Vec<bool> {
        visible_edges(eye, &self.vertex_data)
    }

    /// Indexes of the edges visible from `eye` in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use closed_fences::fence;
    /// # use closed_fences::core::math::point;
    /// let square = fence![(0, 0), (2, 0), (2, 2), (0, 2)];
    /// assert_eq!(square.visible_edge_indexes(&point(-1, -1)), vec![0, 3]);
    /// ```
    pub fn visible_edge_indexes(&self, eye: &Point<T>) -> Vec<usize> {
        self.visible_edges(eye)
            .into_iter()
            .enumerate()
            .filter_map(|(i, visible)| visible.then_some(i))
            .collect()
    }
}

impl<T> Index<usize> for Fence<T> {
    type Output = Point<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertex_data[index]
    }
}

impl<T> IndexMut<usize> for Fence<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertex_data[index]
    }
}

impl<T> FromIterator<Point<T>> for Fence<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Fence {
            vertex_data: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<Point<T>>> for Fence<T> {
    #[inline]
    fn from(vertexes: Vec<Point<T>>) -> Self {
        Fence {
            vertex_data: vertexes,
        }
    }
}
