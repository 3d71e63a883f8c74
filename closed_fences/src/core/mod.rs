//! Core module has the exact point/segment types, segment math and numeric traits shared by the
//! fence algorithms.
pub mod math;
pub mod traits;
