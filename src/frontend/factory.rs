//! Creating and registering compilation units.

use std::sync::Arc;

use parking_lot::RwLock;

use super::error::FrontendError;
use super::identifier::resolve_module_identifier;
use super::options::BuildOptions;
use super::session::{Registration, Session};
use crate::syntax::{CompilationUnit, Component};

/// Allocate a component and its unit, name it, and register it in `session`.
///
/// Kind and builtin access are taken verbatim from `options`. Under the
/// default [`RegistrationPolicy::Overwrite`](super::RegistrationPolicy::Overwrite)
/// an existing entry with the same identifier is replaced without error.
pub(crate) fn create_unit(
    session: &Session,
    output_name: &str,
    options: &BuildOptions,
) -> Result<Registration, FrontendError> {
    let component = Component::new(session.next_component_id());
    let name = resolve_module_identifier(
        output_name,
        options.kind,
        session.interner(),
        session.diagnostics(),
    );

    let mut unit = CompilationUnit::new(name.clone(), options.kind, component);
    unit.has_builtin_module_access = options.allow_builtin_module_access;

    tracing::debug!(
        module = %name,
        kind = ?options.kind,
        component = unit.component.id().0,
        "created compilation unit"
    );
    session.register(name, Arc::new(RwLock::new(unit)), options.registration)
}
