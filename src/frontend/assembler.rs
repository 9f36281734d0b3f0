//! Whole-module assembly: several library buffers into one unit.

use text_size::TextSize;

use super::error::FrontendError;
use super::options::BuildOptions;
use super::session::Session;
use crate::base::BufferId;
use crate::parser::UnitParser;
use crate::sema::SemanticChecker;
use crate::syntax::{CompilationUnit, UnitKind};

/// Parse every buffer to completion in order, then check the unit once.
///
/// Only libraries may be assembled: scripts and IR buffers rely on early
/// returns, which a multi-buffer build cannot resume. Any early return here
/// is a parser contract violation and aborts the build.
pub(crate) fn assemble_whole_module<P, C>(
    parser: &P,
    checker: &C,
    session: &Session,
    unit: &mut CompilationUnit,
    buffers: &[BufferId],
    options: &BuildOptions,
) -> Result<(), FrontendError>
where
    P: UnitParser + ?Sized,
    C: SemanticChecker + ?Sized,
{
    if unit.kind != UnitKind::Library {
        return Err(FrontendError::BatchRequiresLibrary { kind: unit.kind });
    }

    let ctx = session.parse_context();
    for &buffer in buffers {
        let len = session
            .sources()
            .len(buffer)
            .ok_or(FrontendError::UnknownBuffer(buffer))?;

        let step = parser.parse_into(&ctx, unit, buffer, TextSize::from(0), None);
        if step.new_offset != len {
            tracing::error!(
                module = %unit.name,
                %buffer,
                consumed = u32::from(step.new_offset),
                len = u32::from(len),
                stop = ?step.stop,
                "parser returned early during whole-module build"
            );
            return Err(FrontendError::IncompleteParse {
                buffer,
                consumed: step.new_offset.into(),
                len: len.into(),
            });
        }
        tracing::debug!(
            module = %unit.name,
            %buffer,
            decls = step.decls_added,
            "assembled buffer"
        );
    }

    if !options.parse_only {
        checker.check(&session.check_context(), unit, 0);
    }
    Ok(())
}
