//! CLI command implementations.

pub mod common;
pub mod info;
pub mod merge;
pub mod pairs;
