//! Cucumber step definitions for interface tests.

pub mod list_iteration;
pub mod ownership;
