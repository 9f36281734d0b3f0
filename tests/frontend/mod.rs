//! Frontend integration tests
//!
//! End-to-end unit builds through the standard parser and checker:
//! - Module identifier resolution
//! - Incremental script builds and whole-module library builds
//! - IR buffers
//! - The module registry and cross-module imports

mod tests_build_pipeline;
mod tests_identifier;
mod tests_ir;
mod tests_registry;
