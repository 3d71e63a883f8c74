//! Exact two dimensional fence geometry.
//!
//! A fence is a closed polygon given by its vertexes in order, the last vertex implicitly
//! connecting back to the first. This crate checks whether a fence is simple (no edge crosses or
//! touches a non adjacent edge) and determines which edges are visible from an eye point. All
//! predicates are evaluated with exact integer and rational arithmetic so results never depend on
//! floating point rounding.
//!
//! # Examples
//!
//! ```
//! use closed_fences::core::math::point;
//! use closed_fences::fence::*;
//!
//! let fence = [point(0, 0), point(2, 0), point(2, 2), point(0, 2)];
//! assert_eq!(validate_fence(&fence), FenceValidation::Valid);
//! assert_eq!(
//!     visible_edges(&point(-1, -1), &fence),
//!     vec![true, false, false, true]
//! );
//! ```
#[macro_use]
mod macros;
pub mod core;
pub mod fence;

pub use crate::core::math::{point, Point, Segment};
pub use crate::core::traits::ExactNum;
pub use crate::fence::{
    validate_fence, validate_fence_opt, visible_edges, Fence, FenceValidateOptions,
    FenceValidation,
};
