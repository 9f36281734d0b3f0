//! Module identifiers derived from output names.

use std::path::Path;

use crate::base::constants::{BAD_MODULE, MAIN_FALLBACK_MODULE, STDIN_MODULE, STDIN_OUTPUT_NAME};
use crate::base::{Diagnostic, DiagnosticSink, Interner, Name, codes, is_identifier};
use crate::syntax::UnitKind;

/// Derive the canonical module identifier for `output_name`.
///
/// Never fails. `<stdin>` maps to `stdin`; otherwise the file stem is used.
/// A stem that is not a legal identifier becomes `main` for scripts (silently,
/// scripts are often named `my-script.weft`) and `bad` for everything else,
/// after reporting a "bad module name" diagnostic at an unknown location.
pub fn resolve_module_identifier(
    output_name: &str,
    kind: UnitKind,
    interner: &Interner,
    diagnostics: &dyn DiagnosticSink,
) -> Name {
    if output_name == STDIN_OUTPUT_NAME {
        return interner.intern(STDIN_MODULE);
    }

    let stem = Path::new(output_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("");

    if is_identifier(stem) {
        return interner.intern(stem);
    }

    if kind == UnitKind::Main {
        return interner.intern(MAIN_FALLBACK_MODULE);
    }

    diagnostics.report(Diagnostic::error(
        codes::BAD_MODULE_NAME,
        format!("module name \"{}\" is not a valid identifier", stem),
    ));
    interner.intern(BAD_MODULE)
}
