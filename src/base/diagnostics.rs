//! Diagnostics: user-facing error reporting.
//!
//! Every stage of the frontend reports through a [`DiagnosticSink`]. Reporting
//! never aborts by itself: a build keeps going after an error so that one pass
//! can surface many independent problems.

use std::sync::Arc;

use parking_lot::Mutex;
use text_size::TextRange;

use super::BufferId;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        })
    }
}

/// A diagnostic message with an optional location.
///
/// A diagnostic without a buffer is reported at an unknown source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The buffer containing this diagnostic, if known.
    pub buffer: Option<BufferId>,
    /// Byte range inside the buffer, if known.
    pub range: Option<TextRange>,
    /// Severity level.
    pub severity: Severity,
    /// Error/warning code (e.g., "E0001").
    pub code: &'static str,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic at an unknown location.
    pub fn error(code: &'static str, message: impl Into<Arc<str>>) -> Self {
        Self {
            buffer: None,
            range: None,
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic at an unknown location.
    pub fn warning(code: &'static str, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(code, message)
        }
    }

    /// Attach a source location.
    pub fn at(mut self, buffer: BufferId, range: TextRange) -> Self {
        self.buffer = Some(buffer);
        self.range = Some(range);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn has_location(&self) -> bool {
        self.buffer.is_some()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes.
///
/// ## Error Code Ranges
///
/// - **E0001-E0099**: Driver errors (module naming)
/// - **E0101-E0199**: Syntax errors
/// - **E0201-E0299**: Semantic errors
pub mod codes {
    /// Output name does not yield a legal module identifier.
    pub const BAD_MODULE_NAME: &str = "E0001";

    /// Unexpected token.
    pub const UNEXPECTED_TOKEN: &str = "E0101";
    /// Missing `;`, `}` or `)`.
    pub const EXPECTED_DELIMITER: &str = "E0102";
    /// Statement at the top level of a non-script unit.
    pub const TOP_LEVEL_EXPRESSION: &str = "E0103";
    /// IR block in a buffer parsed without an IR context.
    pub const IR_OUTSIDE_IR_MODE: &str = "E0104";
    /// Unterminated string literal or block.
    pub const UNTERMINATED: &str = "E0105";
    /// Expression nested past the parser's depth limit.
    pub const NESTING_TOO_DEEP: &str = "E0106";

    /// Duplicate definition.
    pub const DUPLICATE_DEFINITION: &str = "E0201";
    /// `Builtin` imported without builtin module access.
    pub const BUILTIN_ACCESS: &str = "E0202";
    /// Import of a module that is not loaded.
    pub const UNKNOWN_MODULE: &str = "E0203";
    /// Undefined reference (name not found).
    pub const UNDEFINED_REFERENCE: &str = "E0204";
    /// IR block signature names an unknown type.
    pub const UNKNOWN_IR_TYPE: &str = "E0205";
}

// ============================================================================
// SINK
// ============================================================================

/// Receiver of diagnostics. Implementations must not abort.
pub trait DiagnosticSink: Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Collects diagnostics; safe to share between concurrent builds.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Diagnostics carrying the given code.
    pub fn with_code(&self, code: &str) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .iter()
            .filter(|d| d.code == code)
            .cloned()
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.lock().iter().filter(|d| d.is_error()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    /// Drain all collected diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::debug!(code = diagnostic.code, "{}", diagnostic.message);
        self.diagnostics.lock().push(diagnostic);
    }
}
