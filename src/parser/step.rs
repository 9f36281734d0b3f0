//! The contract between the build orchestrator and a parser.
//!
//! A parser is handed a unit, a buffer and a start offset. It appends zero or
//! more declarations and reports where it stopped and why as a [`ParseStep`].
//! A step that does not reach the end of the buffer must have consumed
//! strictly more input than it was given.

use text_size::TextSize;

use crate::base::{BufferId, DiagnosticSink, Interner, SourceManager};
use crate::syntax::{CompilationUnit, IrModule};

/// Why a parser call returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The whole buffer has been consumed.
    EndOfBuffer,
    /// A chunk of top-level statements in a script was just finished.
    TopLevelBoundary,
    /// A boundary between declarations and a raw IR block was reached.
    IrBoundary,
}

/// Outcome of one parser invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStep {
    pub decls_added: usize,
    pub new_offset: TextSize,
    pub stop: StopReason,
}

impl ParseStep {
    pub fn stopped_early(&self) -> bool {
        self.stop != StopReason::EndOfBuffer
    }
}

/// Shared services a parser may use.
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    pub sources: &'a SourceManager,
    pub interner: &'a Interner,
    pub diagnostics: &'a dyn DiagnosticSink,
}

/// IR-parsing context handle, live for one pump over an IR buffer.
///
/// IR blocks found by the parser are filed into the borrowed [`IrModule`].
#[derive(Debug)]
pub struct IrParserState<'m> {
    module: &'m mut IrModule,
    blocks_parsed: usize,
}

impl<'m> IrParserState<'m> {
    pub fn new(module: &'m mut IrModule) -> Self {
        Self {
            module,
            blocks_parsed: 0,
        }
    }

    pub fn module(&self) -> &IrModule {
        self.module
    }

    pub fn module_mut(&mut self) -> &mut IrModule {
        self.module
    }

    /// IR blocks parsed through this context so far.
    pub fn blocks_parsed(&self) -> usize {
        self.blocks_parsed
    }

    pub(crate) fn record_block(&mut self) {
        self.blocks_parsed += 1;
    }
}

/// A parser the frontend can pump.
pub trait UnitParser: Sync {
    /// Parse `buffer` from `offset` into `unit`, stopping at the end of the
    /// buffer or at a boundary the unit kind / IR context allows.
    fn parse_into(
        &self,
        ctx: &ParseContext<'_>,
        unit: &mut CompilationUnit,
        buffer: BufferId,
        offset: TextSize,
        ir: Option<&mut IrParserState<'_>>,
    ) -> ParseStep;
}
