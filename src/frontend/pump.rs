//! Incremental build of a single buffer.

use text_size::TextSize;

use super::error::FrontendError;
use super::options::BuildOptions;
use super::session::Session;
use crate::base::BufferId;
use crate::parser::{IrParserState, UnitParser};
use crate::sema::SemanticChecker;
use crate::syntax::{CompilationUnit, IrModule, UnitKind};

/// Alternate parsing and checking until the buffer is consumed.
///
/// Each round parses from where the last one stopped and then checks only
/// the declarations not yet checked, so top-level code is checked in the
/// order it appears. The first round also covers implicit imports. The
/// parser is invoked at least once, even for an empty buffer. An IR-parsing
/// context is created only for IR-buffer units that were given an
/// [`IrModule`].
pub(crate) fn pump_single_buffer<P, C>(
    parser: &P,
    checker: &C,
    session: &Session,
    unit: &mut CompilationUnit,
    buffer: BufferId,
    options: &BuildOptions,
    ir_module: Option<&mut IrModule>,
) -> Result<(), FrontendError>
where
    P: UnitParser + ?Sized,
    C: SemanticChecker + ?Sized,
{
    let len = session
        .sources()
        .len(buffer)
        .ok_or(FrontendError::UnknownBuffer(buffer))?;

    let mut ir_state = match (unit.kind, ir_module) {
        (UnitKind::IrBuffer, Some(module)) => Some(IrParserState::new(module)),
        _ => None,
    };

    let parse_ctx = session.parse_context();
    let check_ctx = session.check_context();
    let mut offset = TextSize::from(0);
    let mut checked_upto = 0;
    let mut check_state = C::State::default();
    let mut round = 0usize;

    loop {
        round += 1;
        let step = parser.parse_into(&parse_ctx, unit, buffer, offset, ir_state.as_mut());
        tracing::trace!(
            module = %unit.name,
            round,
            from = u32::from(offset),
            to = u32::from(step.new_offset),
            stop = ?step.stop,
            "pump"
        );

        if step.new_offset > len || (step.new_offset < len && step.new_offset <= offset) {
            tracing::error!(
                module = %unit.name,
                %buffer,
                offset = u32::from(step.new_offset),
                "parser made no progress"
            );
            return Err(FrontendError::ParserStalled {
                buffer,
                offset: step.new_offset.into(),
            });
        }
        offset = step.new_offset;

        if !options.parse_only {
            checker.check_resumed(&check_ctx, unit, checked_upto, &mut check_state);
        }
        checked_upto = unit.decls.len();

        if offset == len {
            break;
        }
    }

    tracing::debug!(module = %unit.name, rounds = round, "pumped buffer");
    Ok(())
}
