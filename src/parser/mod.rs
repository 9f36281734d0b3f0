//! Parser for Weft source buffers
//!
//! This module provides the parsing half of the frontend:
//! - **logos** for fast lexing
//! - a recursive-descent parser over top-level declarations
//!
//! ## Architecture
//!
//! ```text
//! Source buffer (from an offset)
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind and absolute ranges
//!     ↓
//! SourceParser → Decls appended to the CompilationUnit
//!     ↓
//! ParseStep { decls_added, new_offset, stop }
//! ```
//!
//! ## Incremental pumping
//!
//! The parser does not always run to the end of the buffer. In a script it
//! returns after each chunk of top-level statements; with an IR context it
//! returns at every boundary between declarations and an IR block. The caller
//! resumes it from [`ParseStep::new_offset`].

#[allow(clippy::module_inception)]
mod parser;

mod lexer;
mod step;
mod syntax_kind;

pub use lexer::{Lexer, Token, tokenize};
pub use parser::SourceParser;
pub use step::{IrParserState, ParseContext, ParseStep, StopReason, UnitParser};
pub use syntax_kind::SyntaxKind;
