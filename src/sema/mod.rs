//! Semantic analysis of declarations after they are parsed.
//!
//! The frontend calls a [`SemanticChecker`] with a start index: everything
//! before it has already been checked and must not be visited again. A batch
//! build calls it once from zero; the incremental pump calls it after every
//! parser step with the first declaration not yet checked.

mod checker;

pub use checker::{CheckContext, DeclCheckState, DeclChecker, ModuleIndex, SemanticChecker};
