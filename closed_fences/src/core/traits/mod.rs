//! Core/common traits for use in closed_fences.
mod exact_num;

pub use exact_num::ExactNum;
