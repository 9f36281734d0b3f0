//! Build and session configuration.

use crate::base::constants::DEFAULT_AUTO_IMPORT;
use crate::syntax::UnitKind;

/// What to do when a new unit's identifier is already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationPolicy {
    /// Replace the earlier entry. Lookups see the newest unit.
    #[default]
    Overwrite,
    /// Refuse the build with [`FrontendError::DuplicateModule`](super::FrontendError::DuplicateModule).
    Reject,
}

/// Per-build options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildOptions {
    pub kind: UnitKind,
    /// Parse without auto-import or semantic analysis.
    pub parse_only: bool,
    pub allow_builtin_module_access: bool,
    pub registration: RegistrationPolicy,
}

impl BuildOptions {
    pub fn new(kind: UnitKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn library() -> Self {
        Self::new(UnitKind::Library)
    }

    pub fn main() -> Self {
        Self::new(UnitKind::Main)
    }

    pub fn ir_buffer() -> Self {
        Self::new(UnitKind::IrBuffer)
    }

    pub fn parse_only(mut self, parse_only: bool) -> Self {
        self.parse_only = parse_only;
        self
    }

    pub fn allow_builtin_module_access(mut self, allow: bool) -> Self {
        self.allow_builtin_module_access = allow;
        self
    }

    pub fn registration(mut self, policy: RegistrationPolicy) -> Self {
        self.registration = policy;
        self
    }

    /// Whether auto-import runs for this build.
    pub fn wants_auto_import(&self) -> bool {
        self.kind != UnitKind::IrBuffer && !self.parse_only
    }
}

/// Session-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Modules implicitly imported into every checked, non-IR unit, in order.
    pub auto_imports: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_imports: vec![DEFAULT_AUTO_IMPORT.to_string()],
        }
    }
}

impl SessionConfig {
    /// A configuration with no implicit imports.
    pub fn without_auto_imports() -> Self {
        Self {
            auto_imports: Vec::new(),
        }
    }
}
