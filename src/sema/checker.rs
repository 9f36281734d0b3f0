use rustc_hash::{FxHashMap, FxHashSet};
use text_size::TextRange;

use crate::base::constants::BUILTIN_MODULE;
use crate::base::{BufferId, Diagnostic, DiagnosticSink, Name, codes};
use crate::syntax::{CompilationUnit, Decl, DeclKind, Expr};

/// Read access to the modules already loaded in a session.
pub trait ModuleIndex: Sync {
    /// Whether a module with this identifier is registered.
    fn has_module(&self, name: &str) -> bool;

    /// Names declared by a registered module, or `None` if the module is
    /// unknown or still being built.
    fn module_exports(&self, name: &str) -> Option<Vec<Name>>;
}

/// Shared services a checker may use.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    pub diagnostics: &'a dyn DiagnosticSink,
    pub modules: &'a dyn ModuleIndex,
}

/// Type checking / name binding over a suffix of a unit's declarations.
pub trait SemanticChecker: Sync {
    /// Carried between successive checks of the same unit in one build.
    type State: Default;

    /// Check `unit.decls[from..]`. Declarations before `from` are already
    /// checked and are only consulted, never re-checked.
    ///
    /// `state` must come from earlier calls on this unit or be fresh.
    fn check_resumed(
        &self,
        ctx: &CheckContext<'_>,
        unit: &mut CompilationUnit,
        from: usize,
        state: &mut Self::State,
    );

    /// [`check_resumed`](Self::check_resumed) with a fresh state.
    fn check(&self, ctx: &CheckContext<'_>, unit: &mut CompilationUnit, from: usize) {
        self.check_resumed(ctx, unit, from, &mut Self::State::default());
    }
}

/// The reference checker: duplicate definitions, imports, name resolution and
/// IR block signatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclChecker;

impl DeclChecker {
    pub fn new() -> Self {
        Self
    }
}

/// The scope a [`DeclChecker`] left behind, and how far it reaches.
#[derive(Debug, Default)]
pub struct DeclCheckState {
    scope: Scope,
    upto: usize,
}

impl SemanticChecker for DeclChecker {
    type State = DeclCheckState;

    fn check_resumed(
        &self,
        ctx: &CheckContext<'_>,
        unit: &mut CompilationUnit,
        from: usize,
        state: &mut DeclCheckState,
    ) {
        let from = from.min(unit.decls.len());
        if state.upto != from {
            state.scope = Scope::default();
            for decl in &unit.decls[..from] {
                state.scope.absorb(ctx, decl);
            }
        }

        let has_builtin_access = unit.has_builtin_module_access;
        let mut pass = CheckPass {
            ctx,
            scope: std::mem::take(&mut state.scope),
            has_builtin_access,
        };
        for decl in &mut unit.decls[from..] {
            pass.check_decl(decl);
            decl.checked = true;
        }
        state.scope = pass.scope;
        state.upto = unit.decls.len();
        tracing::trace!(
            unit = %unit.name,
            from,
            checked = unit.decls.len() - from,
            "semantic check"
        );
    }
}

/// Names visible at a point in the unit.
#[derive(Debug, Default)]
struct Scope {
    declared: FxHashMap<Name, TextRange>,
    structs: FxHashSet<Name>,
    imported: FxHashSet<Name>,
    exported: FxHashSet<Name>,
}

impl Scope {
    /// Make an already-checked declaration visible without diagnosing it.
    fn absorb(&mut self, ctx: &CheckContext<'_>, decl: &Decl) {
        if let Some(module) = decl.imported_module() {
            self.import(ctx, module);
        }
        if let DeclKind::Struct { name, .. } = &decl.kind {
            self.structs.insert(name.clone());
        }
        if let Some(name) = decl.declared_name() {
            self.declared.entry(name.clone()).or_insert(decl.range);
        }
    }

    fn import(&mut self, ctx: &CheckContext<'_>, module: &Name) {
        if self.imported.insert(module.clone()) {
            if let Some(exports) = ctx.modules.module_exports(module) {
                self.exported.extend(exports);
            }
        }
    }

    fn resolves(&self, name: &Name) -> bool {
        self.declared.contains_key(name) || self.exported.contains(name) || self.imported.contains(name)
    }
}

struct CheckPass<'c, 'a> {
    ctx: &'c CheckContext<'a>,
    scope: Scope,
    has_builtin_access: bool,
}

impl CheckPass<'_, '_> {
    fn check_decl(&mut self, decl: &Decl) {
        match &decl.kind {
            DeclKind::Import { path } => {
                if let Some(module) = path.first() {
                    self.check_import(decl, module);
                }
            }
            DeclKind::Func { .. } => {}
            DeclKind::Struct { name, .. } => {
                self.scope.structs.insert(name.clone());
            }
            DeclKind::Var { init, .. } => {
                if let Some(init) = init {
                    self.check_expr(decl.buffer, init);
                }
            }
            DeclKind::TopLevelCode { stmts } => {
                for stmt in stmts {
                    self.check_expr(decl.buffer, stmt);
                }
            }
            DeclKind::IrBlock { signature, .. } => {
                if !self.scope.structs.contains(signature) {
                    self.report(
                        decl,
                        codes::UNKNOWN_IR_TYPE,
                        format!("IR signature refers to unknown type '{}'", signature),
                    );
                }
            }
        }

        if let Some(name) = decl.declared_name() {
            if let Some(previous) = self.scope.declared.get(name) {
                tracing::trace!(%name, ?previous, "redeclaration");
                self.report(
                    decl,
                    codes::DUPLICATE_DEFINITION,
                    format!("invalid redeclaration of '{}'", name),
                );
            } else {
                self.scope.declared.insert(name.clone(), decl.range);
            }
        }
    }

    fn check_import(&mut self, decl: &Decl, module: &Name) {
        if module == BUILTIN_MODULE {
            if !self.has_builtin_access {
                self.report(
                    decl,
                    codes::BUILTIN_ACCESS,
                    format!("module '{}' is not available to this unit", BUILTIN_MODULE),
                );
            }
        } else if !decl.implicit && !self.ctx.modules.has_module(module) {
            self.report(
                decl,
                codes::UNKNOWN_MODULE,
                format!("no such module '{}'", module),
            );
        }
        self.scope.import(self.ctx, module);
    }

    fn check_expr(&self, buffer: Option<BufferId>, expr: &Expr) {
        expr.for_each_name(&mut |name, range| {
            if !self.scope.resolves(name) {
                let diagnostic = Diagnostic::error(
                    codes::UNDEFINED_REFERENCE,
                    format!("use of unresolved identifier '{}'", name),
                );
                self.ctx.diagnostics.report(locate(diagnostic, buffer, range));
            }
        });
    }

    fn report(&self, decl: &Decl, code: &'static str, message: String) {
        let diagnostic = locate(Diagnostic::error(code, message), decl.buffer, decl.range);
        self.ctx.diagnostics.report(diagnostic);
    }
}

fn locate(diagnostic: Diagnostic, buffer: Option<BufferId>, range: TextRange) -> Diagnostic {
    match buffer {
        Some(buffer) => diagnostic.at(buffer, range),
        None => diagnostic,
    }
}
