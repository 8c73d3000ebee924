// Utilities module
// Helper functions and tools

pub mod naming;
pub mod patterns;

pub use naming::{qualify, strip_extension, strip_project_prefix, with_extension};
pub use patterns::{matches_pattern, PatternMatcher};
