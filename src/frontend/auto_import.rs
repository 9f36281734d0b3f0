//! Implicit imports injected before any user code is parsed.

use super::options::BuildOptions;
use super::session::Session;
use crate::syntax::{CompilationUnit, Decl};

/// Appends the implicit import declarations of a unit.
pub trait AutoImporter: Sync {
    fn inject(&self, session: &Session, unit: &mut CompilationUnit);
}

/// Imports the session's configured [`auto_imports`](super::SessionConfig::auto_imports).
///
/// A module is never implicitly imported into itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredAutoImporter;

impl AutoImporter for ConfiguredAutoImporter {
    fn inject(&self, session: &Session, unit: &mut CompilationUnit) {
        for module in &session.config().auto_imports {
            if unit.name == module.as_str() {
                continue;
            }
            let module = session.interner().intern(module);
            unit.decls.push(Decl::implicit_import(module));
        }
    }
}

/// Run the auto-import step if this build calls for it.
///
/// Must run once, after the unit is created and before the first parser
/// invocation, in both batch and incremental builds. Skipped for IR buffers
/// and parse-only builds. Returns whether it ran.
pub(crate) fn trigger_auto_import<A: AutoImporter + ?Sized>(
    importer: &A,
    session: &Session,
    unit: &mut CompilationUnit,
    options: &BuildOptions,
) -> bool {
    if !options.wants_auto_import() {
        return false;
    }
    let before = unit.decls.len();
    importer.inject(session, unit);
    tracing::debug!(
        module = %unit.name,
        injected = unit.decls.len() - before,
        "auto-import"
    );
    true
}
