//! Closed fences (simple polygons given by their vertexes) and the operations on them: edge
//! iteration, validation, and edge visibility from an eye point.
mod closed_fence;
mod fence_types;
mod fence_validate;
mod fence_visibility;

pub use closed_fence::*;
pub use fence_types::*;
pub use fence_validate::*;
pub use fence_visibility::*;
