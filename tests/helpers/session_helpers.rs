//! Session setup and build shortcuts for integration tests.

use weft::base::BufferId;
use weft::frontend::{BuildOptions, Frontend, Session, SessionConfig, UnitHandle};

/// A session holding one buffer per `(name, text)` pair, in order.
pub fn session_with_sources(sources: &[(&str, &str)]) -> (Session, Vec<BufferId>) {
    let mut session = Session::new();
    let buffers = add_sources(&mut session, sources);
    (session, buffers)
}

/// Same as [`session_with_sources`] but without implicit imports.
pub fn bare_session_with_sources(sources: &[(&str, &str)]) -> (Session, Vec<BufferId>) {
    let mut session = Session::with_config(SessionConfig::without_auto_imports());
    let buffers = add_sources(&mut session, sources);
    (session, buffers)
}

pub fn add_sources(session: &mut Session, sources: &[(&str, &str)]) -> Vec<BufferId> {
    sources
        .iter()
        .map(|(name, text)| session.sources_mut().add_buffer(*name, *text))
        .collect()
}

/// Build with the standard collaborators, panicking on a fatal error.
pub fn build(
    session: &Session,
    output_name: &str,
    buffers: &[BufferId],
    options: BuildOptions,
) -> UnitHandle {
    Frontend::standard()
        .build_unit(session, output_name, buffers, &options, None)
        .unwrap_or_else(|e| panic!("build of '{}' failed: {}", output_name, e))
}

/// Kind tags of every declaration in a unit, for order assertions.
pub fn decl_shapes(handle: &UnitHandle) -> Vec<String> {
    handle
        .read()
        .decls
        .iter()
        .map(|d| match d.declared_name() {
            Some(name) => format!("{}:{}", shape(&d.kind), name),
            None => shape(&d.kind).to_string(),
        })
        .collect()
}

fn shape(kind: &weft::syntax::DeclKind) -> &'static str {
    use weft::syntax::DeclKind;
    match kind {
        DeclKind::Import { .. } => "import",
        DeclKind::Func { .. } => "func",
        DeclKind::Struct { .. } => "struct",
        DeclKind::Var { .. } => "let",
        DeclKind::TopLevelCode { .. } => "code",
        DeclKind::IrBlock { .. } => "ir",
    }
}
