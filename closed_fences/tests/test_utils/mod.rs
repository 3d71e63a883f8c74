#![allow(dead_code)]
mod fence_modifiers;

pub use fence_modifiers::*;
