//! Embedded IR blocks.
//!
//! IR buffers interleave ordinary declarations with raw IR function bodies.
//! The parser files each body into a caller-owned [`IrModule`] and leaves a
//! [`DeclKind::IrBlock`](super::DeclKind::IrBlock) marker in the unit.

use crate::base::{BufferId, Name};
use text_size::TextRange;

/// A single IR function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrFunction {
    pub name: Name,
    pub signature: Name,
    /// Raw instruction lines, trimmed, blank lines dropped.
    pub body: Vec<String>,
    pub buffer: BufferId,
    pub range: TextRange,
}

/// Container the IR blocks of one or more buffers are parsed into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrModule {
    functions: Vec<IrFunction>,
}

impl IrModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, function: IrFunction) {
        self.functions.push(function);
    }

    pub fn functions(&self) -> &[IrFunction] {
        &self.functions
    }

    pub fn function(&self, name: &str) -> Option<&IrFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
