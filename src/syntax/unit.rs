//! The compilation unit: one logical module's parsed (and checked) source.

use crate::base::Name;

use super::Decl;

/// How a unit is built and what the parser may stop for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitKind {
    /// An importable module. The only kind that can span several buffers.
    #[default]
    Library,
    /// A script: top-level statements are allowed and checked chunk by chunk.
    Main,
    /// A buffer mixing declarations with embedded IR blocks.
    IrBuffer,
}

/// Identity of the grouping object that owns a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(pub u32);

/// Lightweight grouping of compilation units.
///
/// Every component currently holds exactly one unit and is created
/// immediately before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: ComponentId,
}

impl Component {
    pub fn new(id: ComponentId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }
}

/// One compilation unit.
///
/// `decls` is append-only during a build and kept in parse order; for a
/// multi-buffer build that is each buffer's declarations, buffers in input order.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub name: Name,
    pub kind: UnitKind,
    pub decls: Vec<Decl>,
    pub has_builtin_module_access: bool,
    pub component: Component,
}

impl CompilationUnit {
    pub fn new(name: Name, kind: UnitKind, component: Component) -> Self {
        Self {
            name,
            kind,
            decls: Vec::new(),
            has_builtin_module_access: false,
            component,
        }
    }

    /// Declarations written in source, skipping implicit imports.
    pub fn source_decls(&self) -> impl Iterator<Item = &Decl> {
        self.decls.iter().filter(|d| !d.implicit)
    }

    /// Names introduced by the unit, in declaration order.
    pub fn declared_names(&self) -> impl Iterator<Item = &Name> {
        self.decls.iter().filter_map(Decl::declared_name)
    }

    pub fn is_fully_checked(&self) -> bool {
        self.decls.iter().all(|d| d.checked)
    }
}
