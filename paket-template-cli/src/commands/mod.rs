//! CLI command implementations.

pub mod check;
pub mod common;
pub mod find;
pub mod show;
