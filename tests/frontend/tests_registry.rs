//! The module registry across builds.

use std::sync::Arc;

use weft::frontend::{BuildOptions, Frontend, FrontendError, RegistrationPolicy};

use crate::helpers::diagnostic_helpers::assert_no_diagnostics;
use crate::helpers::session_helpers::{add_sources, build, session_with_sources};
use crate::helpers::source_fixtures::CORE_LIBRARY;

#[test]
fn test_same_identifier_overwrites_silently() {
    let (session, buffers) =
        session_with_sources(&[("a/util.weft", "let a = 1;"), ("b/util.weft", "let b = 2;")]);

    let first = build(&session, "a/util.weft", &buffers[..1], BuildOptions::library());
    let second = build(&session, "b/util.weft", &buffers[1..], BuildOptions::library());

    assert!(Arc::ptr_eq(&session.lookup("util").unwrap(), &second));
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(session.unit_count(), 2);
    assert_eq!(session.registered_modules().len(), 1);
    assert_no_diagnostics(&session);
}

#[test]
fn test_reject_policy_keeps_first_unit() {
    let (session, buffers) = session_with_sources(&[("util.weft", "let a = 1;")]);
    let options = BuildOptions::library().registration(RegistrationPolicy::Reject);

    let first = build(&session, "util.weft", &buffers, options);
    let err = Frontend::standard()
        .build_unit(&session, "util.weft", &buffers, &options, None)
        .unwrap_err();

    assert!(matches!(err, FrontendError::DuplicateModule(ref name) if name == "util"));
    assert!(Arc::ptr_eq(&session.lookup("util").unwrap(), &first));
}

#[test]
fn test_registered_order_is_first_registration() {
    let (session, buffers) = session_with_sources(&[("x", "")]);

    for name in ["zeta.weft", "alpha.weft", "zeta.weft", "mid.weft"] {
        build(&session, name, &buffers, BuildOptions::library());
    }

    let names: Vec<String> = session
        .registered_modules()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_exports_of_earlier_unit_are_visible_through_import() {
    let (mut session, core) = session_with_sources(&[("core.weft", CORE_LIBRARY)]);
    build(&session, "core.weft", &core, BuildOptions::library());
    let app = add_sources(
        &mut session,
        &[("geo.weft", "struct Point { x }"), ("app.weft", "import geo;\nlet p = Point;\nprint(p);\n")],
    );

    build(&session, "geo.weft", &app[..1], BuildOptions::library());
    build(&session, "app.weft", &app[1..], BuildOptions::main());

    assert_no_diagnostics(&session);
}

#[test]
fn test_unknown_explicit_import() {
    let (session, buffers) = session_with_sources(&[("app.weft", "import nowhere;")]);

    build(&session, "app.weft", &buffers, BuildOptions::library());

    let codes: Vec<_> = session
        .diagnostics()
        .diagnostics()
        .iter()
        .map(|d| d.code)
        .collect();
    assert_eq!(codes, vec![weft::base::codes::UNKNOWN_MODULE]);
}
