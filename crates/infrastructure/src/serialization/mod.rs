//! Deterministic JSON serialization for settings and host output.
//!
//! - 2-space indentation
//! - Trailing newline
//! - UTF-8 encoding without BOM

mod json;

pub use json::*;
