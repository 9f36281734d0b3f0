//! Incremental and whole-module builds through the standard collaborators.

use weft::base::codes;
use weft::frontend::{BuildOptions, BuildRequest, Frontend, FrontendError};

use crate::helpers::diagnostic_helpers::{assert_no_diagnostics, assert_single, reported_codes};
use crate::helpers::session_helpers::{
    add_sources, bare_session_with_sources, build, decl_shapes, session_with_sources,
};
use crate::helpers::source_fixtures::{CORE_LIBRARY, SCRIPT, SHAPES, SHAPES_EXTRA, SHAPES_MORE};

// ============================================================================
// Scripts (single buffer, incremental)
// ============================================================================

#[test]
fn test_script_interleaves_code_and_declarations() {
    let (mut session, core) = session_with_sources(&[("core.weft", CORE_LIBRARY)]);
    build(&session, "core.weft", &core, BuildOptions::library());
    let script = add_sources(&mut session, &[("script.weft", SCRIPT)]);

    let handle = build(&session, "script.weft", &script, BuildOptions::main());

    assert_eq!(
        decl_shapes(&handle),
        vec!["import", "let:greeting", "code", "let:total", "code"]
    );
    assert!(handle.read().decls[0].implicit);
    assert!(handle.read().is_fully_checked());
    assert_no_diagnostics(&session);
}

#[test]
fn test_script_code_is_checked_before_later_declarations() {
    let (session, buffers) =
        bare_session_with_sources(&[("s.weft", "later();\nfunc later() {}\nlater();\n")]);

    build(&session, "s.weft", &buffers, BuildOptions::main());

    let diagnostic = assert_single(&session, codes::UNDEFINED_REFERENCE);
    assert!(diagnostic.message.contains("later"));
    assert_eq!(u32::from(diagnostic.range.unwrap().start()), 0);
}

#[test]
fn test_script_without_core_reports_unresolved_calls() {
    let (session, buffers) = session_with_sources(&[("s.weft", "print(1);")]);

    build(&session, "s.weft", &buffers, BuildOptions::main());

    // The implicit import of a missing module is not itself an error.
    assert_eq!(reported_codes(&session), vec![codes::UNDEFINED_REFERENCE]);
}

#[test]
fn test_library_rejects_top_level_code() {
    let (session, buffers) = bare_session_with_sources(&[("l.weft", "let a = 1;\na;\n")]);

    let handle = build(&session, "l.weft", &buffers, BuildOptions::library());

    assert_eq!(reported_codes(&session), vec![codes::TOP_LEVEL_EXPRESSION]);
    assert_eq!(decl_shapes(&handle), vec!["let:a"]);
}

#[test]
fn test_parse_only_leaves_unit_unchecked() {
    let (session, buffers) = session_with_sources(&[("s.weft", "missing(1);\nlet a = b;\n")]);

    let handle = build(
        &session,
        "s.weft",
        &buffers,
        BuildOptions::main().parse_only(true),
    );

    let unit = handle.read();
    assert_eq!(unit.decls.len(), 2);
    assert!(unit.decls.iter().all(|d| !d.checked && !d.implicit));
    assert_no_diagnostics(&session);
}

#[test]
fn test_syntax_errors_do_not_abort_the_build() {
    let (session, buffers) = bare_session_with_sources(&[("s.weft", "let = ;\nlet ok = 1;\n")]);

    let handle = build(&session, "s.weft", &buffers, BuildOptions::main());

    assert!(session.diagnostics().has_errors());
    assert!(decl_shapes(&handle).contains(&"let:ok".to_string()));
}

// ============================================================================
// Libraries (multiple buffers, whole module)
// ============================================================================

#[test]
fn test_library_buffers_are_assembled_in_order() {
    let (session, buffers) = bare_session_with_sources(&[
        ("shapes.weft", SHAPES),
        ("extra.weft", SHAPES_EXTRA),
        ("more.weft", SHAPES_MORE),
    ]);

    let handle = build(&session, "shapes", &buffers, BuildOptions::library());

    assert_eq!(
        decl_shapes(&handle),
        vec![
            "struct:Point",
            "let:origin",
            "struct:Size",
            "let:unit",
            "func:area",
            "let:zero"
        ]
    );
    let unit = handle.read();
    let owners: Vec<_> = unit.decls.iter().filter_map(|d| d.buffer).collect();
    assert_eq!(
        owners,
        vec![buffers[0], buffers[0], buffers[1], buffers[1], buffers[2], buffers[2]]
    );
    assert!(unit.is_fully_checked());
    assert_no_diagnostics(&session);
}

#[test]
fn test_library_duplicate_across_buffers() {
    let (session, buffers) = bare_session_with_sources(&[
        ("a.weft", "let shared = 1;"),
        ("b.weft", "let shared = 2;"),
    ]);

    build(&session, "dup", &buffers, BuildOptions::library());

    let diagnostic = assert_single(&session, codes::DUPLICATE_DEFINITION);
    assert_eq!(diagnostic.buffer, Some(buffers[1]));
}

#[test]
fn test_multi_buffer_script_is_refused() {
    let (session, buffers) = session_with_sources(&[("a.weft", "f();"), ("b.weft", "g();")]);

    let err = Frontend::standard()
        .build_unit(&session, "script", &buffers, &BuildOptions::main(), None)
        .unwrap_err();

    assert!(matches!(err, FrontendError::BatchRequiresLibrary { .. }));
    assert!(err.is_contract_violation());
    assert_eq!(session.unit_count(), 0);
    assert_no_diagnostics(&session);
}

#[test]
fn test_builtin_access_is_per_unit() {
    let (session, buffers) = bare_session_with_sources(&[("b.weft", "import Builtin;")]);

    build(&session, "denied.weft", &buffers, BuildOptions::library());
    assert_eq!(reported_codes(&session), vec![codes::BUILTIN_ACCESS]);

    session.diagnostics().take();
    build(
        &session,
        "allowed.weft",
        &buffers,
        BuildOptions::library().allow_builtin_module_access(true),
    );
    assert_no_diagnostics(&session);
}

// ============================================================================
// Parallel builds
// ============================================================================

#[test]
fn test_parallel_builds_share_one_session() {
    let sources: Vec<(String, String)> = (0..8)
        .map(|i| (format!("m{i}.weft"), format!("let value{i} = {i};")))
        .collect();
    let borrowed: Vec<(&str, &str)> = sources
        .iter()
        .map(|(n, t)| (n.as_str(), t.as_str()))
        .collect();
    let (session, buffers) = bare_session_with_sources(&borrowed);

    let requests: Vec<BuildRequest> = sources
        .iter()
        .zip(&buffers)
        .map(|((name, _), &b)| BuildRequest::new(name.clone(), vec![b], BuildOptions::library()))
        .collect();

    let results = Frontend::standard().build_units_parallel(&session, &requests);

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(session.registered_modules().len(), 8);
    for i in 0..8 {
        let unit = session.lookup(&format!("m{i}")).unwrap();
        assert_eq!(decl_shapes(&unit), vec![format!("let:value{i}")]);
    }
    assert_no_diagnostics(&session);
}
