//! IR buffers: declarations interleaved with raw IR blocks.

use weft::base::codes;
use weft::frontend::{BuildOptions, Frontend};
use weft::syntax::IrModule;

use crate::helpers::diagnostic_helpers::{assert_no_diagnostics, reported_codes};
use crate::helpers::session_helpers::{decl_shapes, session_with_sources};
use crate::helpers::source_fixtures::IR_BUFFER;

#[test]
fn test_ir_blocks_are_filed_into_module() {
    let (session, buffers) = session_with_sources(&[("lowered.wir", IR_BUFFER)]);
    let mut module = IrModule::new();

    let handle = Frontend::standard()
        .build_unit(
            &session,
            "lowered.wir",
            &buffers,
            &BuildOptions::ir_buffer(),
            Some(&mut module),
        )
        .unwrap();

    assert_eq!(
        decl_shapes(&handle),
        vec!["struct:Pair", "ir:swap", "let:after", "ir:first"]
    );
    assert_eq!(module.len(), 2);
    let swap = module.function("swap").unwrap();
    assert_eq!(swap.signature, "Pair");
    assert_eq!(swap.body, vec!["load a", "load b", "store a"]);
    assert_eq!(module.function("first").unwrap().body, vec!["ret a"]);
    assert!(handle.read().is_fully_checked());
    assert_no_diagnostics(&session);
}

#[test]
fn test_ir_buffer_gets_no_implicit_imports() {
    let (session, buffers) = session_with_sources(&[("x.wir", "struct T {}")]);
    let mut module = IrModule::new();

    let handle = Frontend::standard()
        .build_unit(
            &session,
            "x.wir",
            &buffers,
            &BuildOptions::ir_buffer(),
            Some(&mut module),
        )
        .unwrap();

    assert!(handle.read().decls.iter().all(|d| !d.implicit));
}

#[test]
fn test_ir_signature_must_name_a_struct() {
    let (session, buffers) = session_with_sources(&[("x.wir", "ir @f : Missing { ret }")]);
    let mut module = IrModule::new();

    Frontend::standard()
        .build_unit(
            &session,
            "x.wir",
            &buffers,
            &BuildOptions::ir_buffer(),
            Some(&mut module),
        )
        .unwrap();

    assert_eq!(reported_codes(&session), vec![codes::UNKNOWN_IR_TYPE]);
    assert_eq!(module.len(), 1);
}

#[test]
fn test_ir_without_module_is_reported_not_fatal() {
    let (session, buffers) = session_with_sources(&[("lowered.wir", IR_BUFFER)]);

    let handle = Frontend::standard()
        .build_unit(
            &session,
            "lowered.wir",
            &buffers,
            &BuildOptions::ir_buffer(),
            None,
        )
        .unwrap();

    assert_eq!(
        reported_codes(&session),
        vec![codes::IR_OUTSIDE_IR_MODE, codes::IR_OUTSIDE_IR_MODE]
    );
    assert_eq!(decl_shapes(&handle), vec!["struct:Pair", "let:after"]);
}

#[test]
fn test_ir_module_is_ignored_for_scripts() {
    let (session, buffers) = session_with_sources(&[("s.weft", "ir @f : T { ret }")]);
    let mut module = IrModule::new();

    Frontend::standard()
        .build_unit(
            &session,
            "s.weft",
            &buffers,
            &BuildOptions::main(),
            Some(&mut module),
        )
        .unwrap();

    assert!(module.is_empty());
    assert_eq!(reported_codes(&session), vec![codes::IR_OUTSIDE_IR_MODE]);
}
