//! Foundation types for the Weft frontend.
//!
//! This module provides fundamental types used throughout the frontend:
//! - [`BufferId`] - Handles into the source buffer store
//! - [`SourceManager`], [`SourceBuffer`] - The buffer store itself
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`Position`] - Line/column positions for rendering diagnostics
//! - [`Name`], [`Interner`] - Identifier interning
//! - [`Diagnostic`], [`DiagnosticSink`] - Error reporting
//! - Domain constants (sentinel module names, keywords)
//!
//! This module has NO dependencies on other weft modules.

pub mod constants;
mod buffer_id;
mod diagnostics;
mod ident;
mod intern;
mod position;
mod source;

pub use buffer_id::BufferId;
pub use diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticSink, Severity, codes};
pub use ident::is_identifier;
pub use intern::{Interner, Name};
pub use position::Position;
pub use source::{SourceBuffer, SourceManager};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
