//! Error types for unit builds.

use thiserror::Error;

use crate::base::{BufferId, Name};
use crate::syntax::UnitKind;

/// A build that could not produce a compilation unit.
///
/// Malformed source never ends up here: syntax and type errors are reported
/// as diagnostics and the build carries on. These are violated contracts
/// between the caller, the orchestrator and its collaborators.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// The caller supplied no buffers at all.
    #[error("no input buffers given for '{output_name}'")]
    NoBuffers { output_name: String },

    /// Multi-buffer builds cannot handle early returns from the parser.
    #[error("multiple input buffers can only be built as a library, not as {kind:?}")]
    BatchRequiresLibrary { kind: UnitKind },

    /// A buffer handle the source manager does not know.
    #[error("unknown source buffer: {0}")]
    UnknownBuffer(BufferId),

    /// The parser returned before the end of a buffer in batch mode.
    #[error("parser returned early in {buffer}: consumed {consumed} of {len} bytes")]
    IncompleteParse {
        buffer: BufferId,
        consumed: u32,
        len: u32,
    },

    /// The parser stopped early without consuming any input.
    #[error("parser made no progress in {buffer} at offset {offset}")]
    ParserStalled { buffer: BufferId, offset: u32 },

    /// Registration was rejected because the identifier is taken.
    #[error("a module named '{0}' is already loaded")]
    DuplicateModule(Name),
}

impl FrontendError {
    /// Whether this error is a violated precondition between components
    /// (a non-library batch, or a parser breaking its step contract) rather
    /// than a problem with the caller's inputs.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            FrontendError::BatchRequiresLibrary { .. }
                | FrontendError::IncompleteParse { .. }
                | FrontendError::ParserStalled { .. }
        )
    }
}
