//! Top-level declarations.

use text_size::TextRange;

use super::Expr;
use crate::base::{BufferId, Name};

/// What a top-level declaration is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    /// `import a.b;`
    Import { path: Vec<Name> },
    /// `func f(a, b) { ... }`; the body is checked only for balance.
    Func { name: Name, params: Vec<Name> },
    /// `struct S { x, y }`
    Struct { name: Name, fields: Vec<Name> },
    /// `let x = expr;`
    Var { name: Name, init: Option<Expr> },
    /// A run of executable statements in a script.
    TopLevelCode { stmts: Vec<Expr> },
    /// `ir @name : Type { ... }`; the body lives in the IR module.
    IrBlock { name: Name, signature: Name },
}

/// One top-level declaration of a compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
    pub kind: DeclKind,
    /// Source buffer, `None` for declarations no source text asked for.
    pub buffer: Option<BufferId>,
    pub range: TextRange,
    /// Injected by auto-import rather than written in source.
    pub implicit: bool,
    /// Set once semantic analysis has visited the declaration.
    pub checked: bool,
}

impl Decl {
    pub fn new(kind: DeclKind, buffer: BufferId, range: TextRange) -> Self {
        Self {
            kind,
            buffer: Some(buffer),
            range,
            implicit: false,
            checked: false,
        }
    }

    /// An import that no source text asked for.
    pub fn implicit_import(module: Name) -> Self {
        Self {
            kind: DeclKind::Import { path: vec![module] },
            buffer: None,
            range: TextRange::default(),
            implicit: true,
            checked: false,
        }
    }

    /// The name this declaration introduces into the unit's scope, if any.
    pub fn declared_name(&self) -> Option<&Name> {
        match &self.kind {
            DeclKind::Func { name, .. }
            | DeclKind::Struct { name, .. }
            | DeclKind::Var { name, .. }
            | DeclKind::IrBlock { name, .. } => Some(name),
            DeclKind::Import { .. } | DeclKind::TopLevelCode { .. } => None,
        }
    }

    /// Root module of an import, if this is one.
    pub fn imported_module(&self) -> Option<&Name> {
        match &self.kind {
            DeclKind::Import { path } => path.first(),
            _ => None,
        }
    }

    pub fn is_top_level_code(&self) -> bool {
        matches!(self.kind, DeclKind::TopLevelCode { .. })
    }
}
