//! # weft-base
//!
//! Compilation-unit build orchestration for the Weft frontend.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Loading source files from disk into a session
//!   ↓
//! frontend  → Session, module registry, unit builds (batch / incremental)
//!   ↓
//! sema      → Semantic checking over a suffix of a unit's declarations
//!   ↓
//! parser    → Logos lexer, resumable recursive-descent parser
//!   ↓
//! syntax    → Declarations, compilation units, IR modules
//!   ↓
//! base      → Primitives (BufferId, Name interning, diagnostics, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → sema → frontend → project)
// ============================================================================

/// Foundation types: BufferId, Name interning, diagnostics, TextRange
pub mod base;

/// Syntax: declarations, compilation units, IR modules
pub mod syntax;

/// Parser: Logos lexer and the step-wise parser contract
pub mod parser;

/// Semantic analysis over declaration suffixes
pub mod sema;

/// Unit builds, sessions and the module registry
pub mod frontend;

/// Project management: loading files from disk
pub mod project;

// Re-export commonly needed items
pub use frontend::{BuildOptions, BuildRequest, Frontend, FrontendError, Session, UnitHandle};

// Re-export foundation types
pub use base::{BufferId, Diagnostic, Interner, Name, Position, TextRange, TextSize};
pub use syntax::{CompilationUnit, UnitKind};
