//! The explicit session object every build runs against.
//!
//! A [`Session`] owns the buffer store, the interner, the diagnostics sink,
//! every compilation unit created in it, and the registry mapping module
//! identifiers to units. Independent units may be built concurrently against
//! one session; registry writes are serialized behind a single lock and the
//! registry keeps insertion order.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};

use super::error::FrontendError;
use super::options::{RegistrationPolicy, SessionConfig};
use crate::base::{DiagnosticCollector, Interner, Name, SourceManager};
use crate::parser::ParseContext;
use crate::sema::{CheckContext, ModuleIndex};
use crate::syntax::{CompilationUnit, ComponentId};

/// Shared handle to a compilation unit.
pub type UnitHandle = Arc<RwLock<CompilationUnit>>;

/// Outcome of inserting a unit into the registry.
#[derive(Debug)]
pub(crate) struct Registration {
    pub(crate) name: Name,
    pub(crate) handle: UnitHandle,
    /// The entry this registration replaced, if any.
    pub(crate) previous: Option<UnitHandle>,
}

#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    sources: SourceManager,
    interner: Interner,
    diagnostics: DiagnosticCollector,
    units: Mutex<Vec<UnitHandle>>,
    registry: RwLock<IndexMap<Name, UnitHandle>>,
    next_component: AtomicU32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // =========================================================================
    // Services
    // =========================================================================

    pub fn sources(&self) -> &SourceManager {
        &self.sources
    }

    /// Buffers must all be added before any build borrows the session.
    pub fn sources_mut(&mut self) -> &mut SourceManager {
        &mut self.sources
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn diagnostics(&self) -> &DiagnosticCollector {
        &self.diagnostics
    }

    pub fn parse_context(&self) -> ParseContext<'_> {
        ParseContext {
            sources: &self.sources,
            interner: &self.interner,
            diagnostics: &self.diagnostics,
        }
    }

    pub fn check_context(&self) -> CheckContext<'_> {
        CheckContext {
            diagnostics: &self.diagnostics,
            modules: self,
        }
    }

    // =========================================================================
    // Units
    // =========================================================================

    pub(crate) fn next_component_id(&self) -> ComponentId {
        ComponentId(self.next_component.fetch_add(1, Ordering::Relaxed))
    }

    /// Every unit created in this session, including ones whose registry
    /// entry was later overwritten.
    pub fn units(&self) -> Vec<UnitHandle> {
        self.units.lock().clone()
    }

    pub fn unit_count(&self) -> usize {
        self.units.lock().len()
    }

    // =========================================================================
    // Registry
    // =========================================================================

    /// Insert `handle` under `name`, serialized with every other registry write.
    pub(crate) fn register(
        &self,
        name: Name,
        handle: UnitHandle,
        policy: RegistrationPolicy,
    ) -> Result<Registration, FrontendError> {
        let mut registry = self.registry.write();
        if policy == RegistrationPolicy::Reject && registry.contains_key(&name) {
            return Err(FrontendError::DuplicateModule(name));
        }
        let previous = registry.insert(name.clone(), Arc::clone(&handle));
        drop(registry);

        if previous.is_some() {
            tracing::warn!(module = %name, "module identifier re-registered; earlier unit is shadowed");
        }
        self.units.lock().push(Arc::clone(&handle));
        Ok(Registration {
            name,
            handle,
            previous,
        })
    }

    /// Undo a registration after its build was aborted.
    ///
    /// Only restores the entry if it still points at the aborted unit; a later
    /// registration under the same name is left alone.
    pub(crate) fn unregister(&self, registration: Registration) {
        let Registration {
            name,
            handle,
            previous,
        } = registration;

        let mut registry = self.registry.write();
        let still_ours = registry
            .get(&name)
            .is_some_and(|current| Arc::ptr_eq(current, &handle));
        if still_ours {
            match previous {
                Some(previous) => {
                    registry.insert(name, previous);
                }
                None => {
                    registry.shift_remove(&name);
                }
            }
        }
        drop(registry);

        self.units.lock().retain(|unit| !Arc::ptr_eq(unit, &handle));
    }

    /// The unit currently registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<UnitHandle> {
        self.registry.read().get(name).cloned()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.read().contains_key(name)
    }

    /// Registered identifiers in first-registration order.
    pub fn registered_modules(&self) -> Vec<Name> {
        self.registry.read().keys().cloned().collect()
    }
}

impl ModuleIndex for Session {
    fn has_module(&self, name: &str) -> bool {
        self.is_registered(name)
    }

    fn module_exports(&self, name: &str) -> Option<Vec<Name>> {
        let handle = self.lookup(name)?;
        // A unit that is still being built (possibly the caller itself) is locked.
        let unit = handle.try_read()?;
        Some(unit.declared_names().cloned().collect())
    }
}
