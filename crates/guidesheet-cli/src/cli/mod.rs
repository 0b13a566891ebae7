//! CLI command implementations.

pub mod common;
pub mod preset;
pub mod render;
