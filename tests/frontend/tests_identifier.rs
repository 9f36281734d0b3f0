//! Module identifiers as seen through full builds.

use rstest::rstest;
use weft::base::codes;
use weft::frontend::BuildOptions;
use weft::syntax::UnitKind;

use crate::helpers::diagnostic_helpers::{assert_no_diagnostics, assert_single};
use crate::helpers::session_helpers::{build, session_with_sources};

#[rstest]
#[case(UnitKind::Library)]
#[case(UnitKind::Main)]
#[case(UnitKind::IrBuffer)]
fn test_stdin_builds_register_as_stdin(#[case] kind: UnitKind) {
    let (session, buffers) = session_with_sources(&[("<stdin>", "")]);

    let handle = build(&session, "<stdin>", &buffers, BuildOptions::new(kind).parse_only(true));

    assert_eq!(handle.read().name, "stdin");
    assert!(session.is_registered("stdin"));
    assert_no_diagnostics(&session);
}

#[test]
fn test_bad_library_name_reports_once_and_registers_bad() {
    let (session, buffers) = session_with_sources(&[("x", "let a = 1;")]);

    let handle = build(&session, "my-lib.weft", &buffers, BuildOptions::library());

    assert_eq!(handle.read().name, "bad");
    assert!(session.is_registered("bad"));
    let diagnostic = assert_single(&session, codes::BAD_MODULE_NAME);
    assert!(!diagnostic.has_location());
    assert!(diagnostic.message.contains("my-lib"));
}

#[test]
fn test_bad_script_name_silently_becomes_main() {
    let (session, buffers) = session_with_sources(&[("x", "let a = 1;")]);

    let handle = build(&session, "2fast.weft", &buffers, BuildOptions::main());

    assert_eq!(handle.read().name, "main");
    assert!(session.is_registered("main"));
    assert_no_diagnostics(&session);
}

#[rstest]
#[case("src/geometry.weft", "geometry")]
#[case("geometry", "geometry")]
#[case("lowered.wir", "lowered")]
fn test_stem_becomes_identifier(#[case] output_name: &str, #[case] expected: &str) {
    let (session, buffers) = session_with_sources(&[("x", "")]);

    let handle = build(&session, output_name, &buffers, BuildOptions::library());

    assert_eq!(handle.read().name, expected);
}
