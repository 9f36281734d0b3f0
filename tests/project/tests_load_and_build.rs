//! Loading a directory from disk and building it as one library.

use std::fs;

use tempfile::TempDir;
use weft::frontend::{BuildOptions, Session, SessionConfig};
use weft::project::{collect_source_paths, load_buffer, load_directory};

use crate::helpers::diagnostic_helpers::assert_no_diagnostics;
use crate::helpers::session_helpers::{build, decl_shapes};

#[test]
fn test_directory_builds_as_library() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.weft"), "struct Point { x, y }\n").unwrap();
    fs::write(temp.path().join("b.weft"), "let origin = Point;\n").unwrap();
    fs::write(temp.path().join("README.md"), "ignored").unwrap();

    let mut session = Session::with_config(SessionConfig::without_auto_imports());
    let buffers = load_directory(&mut session, temp.path()).unwrap();
    let handle = build(&session, "geometry", &buffers, BuildOptions::library());

    assert_eq!(decl_shapes(&handle), vec!["struct:Point", "let:origin"]);
    assert_no_diagnostics(&session);
}

#[test]
fn test_loaded_path_names_the_unit() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("hello.weft");
    fs::write(&path, "let x = 1;\nx;\n").unwrap();

    let mut session = Session::new();
    let buffer = load_buffer(&mut session, &path).unwrap();
    let output_name = session.sources().buffer(buffer).unwrap().name().to_string();
    let handle = build(&session, &output_name, &[buffer], BuildOptions::main());

    assert_eq!(handle.read().name, "hello");
    assert!(session.is_registered("hello"));
}

#[test]
fn test_empty_directory_has_no_sources() {
    let temp = TempDir::new().unwrap();
    assert!(collect_source_paths(temp.path()).unwrap().is_empty());
}
