//! HTTP infrastructure utilities.

mod body_builder;

pub use body_builder::{BodyBuildError, build_multipart_form};
