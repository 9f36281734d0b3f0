//! Syntax: the compilation unit and the declaration nodes it holds.
//!
//! A compilation unit is a flat, ordered list of top-level [`Decl`]s. Nested
//! bodies are kept only as far as the checker needs them.

mod decl;
mod expr;
mod ir;
mod unit;

pub use decl::{Decl, DeclKind};
pub use expr::Expr;
pub use ir::{IrFunction, IrModule};
pub use unit::{CompilationUnit, Component, ComponentId, UnitKind};
