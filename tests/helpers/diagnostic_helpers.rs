//! Diagnostic assertion helpers.

use weft::base::Diagnostic;
use weft::frontend::Session;

/// Codes of every diagnostic reported so far, in report order.
pub fn reported_codes(session: &Session) -> Vec<&'static str> {
    session.diagnostics().diagnostics().iter().map(|d| d.code).collect()
}

/// Assert the session has no diagnostics at all.
pub fn assert_no_diagnostics(session: &Session) {
    let diagnostics = session.diagnostics().diagnostics();
    assert!(
        diagnostics.is_empty(),
        "Expected no diagnostics, got {}:\n{}",
        diagnostics.len(),
        render(&diagnostics)
    );
}

/// Assert exactly one diagnostic with `code` was reported.
pub fn assert_single(session: &Session, code: &str) -> Diagnostic {
    let diagnostics = session.diagnostics().diagnostics();
    assert_eq!(
        diagnostics.len(),
        1,
        "Expected exactly one diagnostic, got:\n{}",
        render(&diagnostics)
    );
    assert_eq!(diagnostics[0].code, code);
    diagnostics[0].clone()
}

fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  {}", d))
        .collect::<Vec<_>>()
        .join("\n")
}
