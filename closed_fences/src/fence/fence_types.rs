//! Supporting public types used by the fence validation and visibility functions.

use std::fmt;

/// Outcome of validating a fence with [validate_fence](super::validate_fence).
///
/// Anything other than [FenceValidation::Valid] describes the first problem found while walking
/// the fence edges in order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FenceValidation {
    /// Fence is a simple closed polygon.
    Valid,
    /// Not enough vertexes to form a fence.
    TooFewVertices {
        /// Number of vertexes given.
        count: usize,
    },
    /// Edge folds back over (or is collinear and overlapping with) the edge before it, this also
    /// catches zero length edges.
    Backtrack {
        /// Index of the edge that folds back.
        edge_index: usize,
    },
    /// Two non adjacent edges share a point.
    Crossing {
        /// Index of the edge being placed when the crossing was found.
        edge_index: usize,
        /// Index of the earlier edge it crosses or touches.
        other_index: usize,
    },
    /// A neighboring vertex of the closing edge (last vertex back to the first) lies on it.
    ClosingEdgeTouch {
        /// Index of the vertex lying on the closing edge.
        vertex_index: usize,
    },
}

impl FenceValidation {
    /// Returns true if the fence is valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, FenceValidation::Valid)
    }
}

impl fmt::Display for FenceValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenceValidation::Valid => write!(f, "valid fence"),
            FenceValidation::TooFewVertices { count } => {
                write!(f, "too few vertexes to form a fence: {count}")
            }
            FenceValidation::Backtrack { edge_index } => {
                write!(f, "edge {edge_index} folds back over the previous edge")
            }
            FenceValidation::Crossing {
                edge_index,
                other_index,
            } => write!(f, "edge {edge_index} intersects edge {other_index}"),
            FenceValidation::ClosingEdgeTouch { vertex_index } => {
                write!(f, "vertex {vertex_index} lies on the closing edge")
            }
        }
    }
}

/// Struct to hold options parameters when validating a fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceValidateOptions {
    /// If true then three vertex fences are validated like any other, if false (the default) any
    /// fence with three or fewer vertexes is rejected. Fewer than three vertexes is always
    /// rejected.
    pub allow_triangles: bool,
}

impl FenceValidateOptions {
    #[inline]
    pub fn new() -> Self {
        Self {
            allow_triangles: false,
        }
    }

    /// Smallest vertex count accepted under these options.
    #[inline]
    pub fn min_vertex_count(&self) -> usize {
        if self.allow_triangles {
            3
        } else {
            4
        }
    }
}

impl Default for FenceValidateOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
