//! Recursive descent parser for Weft top-level declarations
//!
//! Parses from an arbitrary offset and stops at the boundaries the unit kind
//! allows (see [`StopReason`]). Errors are reported to the diagnostics sink and
//! recovered from; the parser never gives up on a buffer.

use text_size::{TextRange, TextSize};

use super::lexer::{Lexer, Token};
use super::step::{IrParserState, ParseContext, ParseStep, StopReason, UnitParser};
use super::syntax_kind::SyntaxKind;
use crate::base::{BufferId, Diagnostic, Name, codes};
use crate::syntax::{CompilationUnit, Decl, DeclKind, Expr, IrFunction, UnitKind};

/// Deepest expression nesting (parentheses and call arguments) the parser
/// descends into before giving up on the statement.
const MAX_EXPR_DEPTH: usize = 256;

/// The reference [`UnitParser`] for Weft source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceParser;

impl SourceParser {
    pub fn new() -> Self {
        Self
    }
}

impl UnitParser for SourceParser {
    fn parse_into(
        &self,
        ctx: &ParseContext<'_>,
        unit: &mut CompilationUnit,
        buffer: BufferId,
        offset: TextSize,
        ir: Option<&mut IrParserState<'_>>,
    ) -> ParseStep {
        let Some(text) = ctx.sources.text(buffer) else {
            tracing::error!(%buffer, "parser asked for an unknown buffer");
            return ParseStep {
                decls_added: 0,
                new_offset: offset,
                stop: StopReason::EndOfBuffer,
            };
        };
        let len = TextSize::of(text);
        let start = offset.min(len);
        let Some(rest) = text.get(usize::from(start)..) else {
            tracing::error!(%buffer, offset = u32::from(start), "offset is not on a character boundary");
            return ParseStep {
                decls_added: 0,
                new_offset: len,
                stop: StopReason::EndOfBuffer,
            };
        };

        let tokens = Lexer::with_base(rest, start)
            .filter(|t| !t.kind.is_trivia())
            .collect();
        let mut parser = Parser {
            ctx,
            buffer,
            text,
            tokens,
            pos: 0,
            len,
            kind: unit.kind,
            ir,
            decls: Vec::new(),
            depth: 0,
        };
        let stop = parser.parse_top_level();
        let new_offset = parser.offset();
        let decls_added = parser.decls.len();
        unit.decls.append(&mut parser.decls);

        tracing::trace!(
            %buffer,
            from = u32::from(start),
            to = u32::from(new_offset),
            decls_added,
            ?stop,
            "parser step"
        );
        ParseStep {
            decls_added,
            new_offset,
            stop,
        }
    }
}

/// The parser state for one invocation
struct Parser<'a, 'i, 'm> {
    ctx: &'a ParseContext<'a>,
    buffer: BufferId,
    text: &'a str,
    /// Significant tokens from the start offset to the end of the buffer.
    tokens: Vec<Token<'a>>,
    pos: usize,
    len: TextSize,
    kind: UnitKind,
    ir: Option<&'i mut IrParserState<'m>>,
    decls: Vec<Decl>,
    /// Current expression nesting.
    depth: usize,
}

impl<'a> Parser<'a, '_, '_> {
    // =========================================================================
    // Top level
    // =========================================================================

    fn parse_top_level(&mut self) -> StopReason {
        while let Some(token) = self.current() {
            match token.kind {
                SyntaxKind::IR_KW => {
                    if self.ir.is_none() {
                        self.error_here(
                            codes::IR_OUTSIDE_IR_MODE,
                            "IR blocks are only allowed in IR buffers",
                        );
                        self.bump();
                        self.recover();
                        continue;
                    }
                    // Declarations before an IR block are handed back first so
                    // they can be checked before the block is read.
                    if self.pos > 0 {
                        return self.stop(StopReason::IrBoundary);
                    }
                    self.parse_ir_block();
                    return self.stop(StopReason::IrBoundary);
                }
                SyntaxKind::IMPORT_KW => self.parse_import(),
                SyntaxKind::FUNC_KW => self.parse_func(),
                SyntaxKind::STRUCT_KW => self.parse_struct(),
                SyntaxKind::LET_KW => self.parse_let(),
                _ if self.kind == UnitKind::Main => {
                    self.parse_top_level_code();
                    return self.stop(StopReason::TopLevelBoundary);
                }
                _ => {
                    self.error_here(
                        codes::TOP_LEVEL_EXPRESSION,
                        "expressions are not allowed at the top level",
                    );
                    self.parse_statement();
                }
            }
        }
        StopReason::EndOfBuffer
    }

    fn stop(&self, reason: StopReason) -> StopReason {
        if self.at_eof() {
            StopReason::EndOfBuffer
        } else {
            reason
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn parse_import(&mut self) {
        let start = self.start();
        self.bump();

        let mut path = Vec::new();
        loop {
            let Some(segment) = self.expect_ident("module name") else {
                self.recover();
                return;
            };
            path.push(segment);
            if !self.eat(SyntaxKind::DOT) {
                break;
            }
        }
        self.finish_with_semicolon(DeclKind::Import { path }, start);
    }

    fn parse_func(&mut self) {
        let start = self.start();
        self.bump();

        let Some(name) = self.expect_ident("function name") else {
            self.recover();
            return;
        };
        if self.expect(SyntaxKind::L_PAREN, codes::UNEXPECTED_TOKEN).is_none() {
            self.recover();
            return;
        }
        let mut params = Vec::new();
        if !self.at(SyntaxKind::R_PAREN) {
            loop {
                let Some(param) = self.expect_ident("parameter name") else {
                    self.recover();
                    return;
                };
                params.push(param);
                if !self.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
        }
        if self
            .expect(SyntaxKind::R_PAREN, codes::EXPECTED_DELIMITER)
            .is_none()
        {
            self.recover();
            return;
        }
        if self.skip_block().is_none() {
            return;
        }
        self.push_decl(DeclKind::Func { name, params }, start);
    }

    fn parse_struct(&mut self) {
        let start = self.start();
        self.bump();

        let Some(name) = self.expect_ident("struct name") else {
            self.recover();
            return;
        };
        if self
            .expect(SyntaxKind::L_BRACE, codes::UNEXPECTED_TOKEN)
            .is_none()
        {
            self.recover();
            return;
        }
        let mut fields = Vec::new();
        while self.at(SyntaxKind::IDENT) {
            if let Some(field) = self.bump() {
                fields.push(self.intern(field.text));
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        if self
            .expect(SyntaxKind::R_BRACE, codes::EXPECTED_DELIMITER)
            .is_none()
        {
            self.recover();
            return;
        }
        self.push_decl(DeclKind::Struct { name, fields }, start);
    }

    fn parse_let(&mut self) {
        let start = self.start();
        self.bump();

        let Some(name) = self.expect_ident("variable name") else {
            self.recover();
            return;
        };
        let init = if self.eat(SyntaxKind::EQ) {
            let Some(expr) = self.parse_expr() else {
                self.recover();
                return;
            };
            Some(expr)
        } else {
            None
        };
        self.finish_with_semicolon(DeclKind::Var { name, init }, start);
    }

    /// `ir @name : Type { raw lines }`, filed into the IR module.
    fn parse_ir_block(&mut self) {
        let start = self.start();
        self.bump();

        if self.expect(SyntaxKind::AT, codes::UNEXPECTED_TOKEN).is_none() {
            self.recover();
            return;
        }
        let Some(name) = self.expect_ident("IR function name") else {
            self.recover();
            return;
        };
        if self.expect(SyntaxKind::COLON, codes::UNEXPECTED_TOKEN).is_none() {
            self.recover();
            return;
        }
        let Some(signature) = self.expect_ident("IR signature type") else {
            self.recover();
            return;
        };
        let Some(body_range) = self.skip_block() else {
            return;
        };

        let body = self.text[body_range]
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        let range = TextRange::new(start, self.last_end());
        if let Some(ir) = self.ir.as_deref_mut() {
            ir.module_mut().push(IrFunction {
                name: name.clone(),
                signature: signature.clone(),
                body,
                buffer: self.buffer,
                range,
            });
            ir.record_block();
        }
        self.push_decl(DeclKind::IrBlock { name, signature }, start);
    }

    /// A run of statements in a script, kept as one declaration.
    fn parse_top_level_code(&mut self) {
        let start = self.start();
        let mut stmts = Vec::new();
        while let Some(token) = self.current() {
            if token.kind.is_decl_start() {
                break;
            }
            if let Some(stmt) = self.parse_statement() {
                stmts.push(stmt);
            }
        }
        if !stmts.is_empty() {
            self.push_decl(DeclKind::TopLevelCode { stmts }, start);
        }
    }

    fn parse_statement(&mut self) -> Option<Expr> {
        let Some(expr) = self.parse_expr() else {
            self.recover();
            return None;
        };
        if self
            .expect(SyntaxKind::SEMICOLON, codes::EXPECTED_DELIMITER)
            .is_none()
        {
            self.recover();
        }
        Some(expr)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn parse_expr(&mut self) -> Option<Expr> {
        if self.depth >= MAX_EXPR_DEPTH {
            self.error_here(codes::NESTING_TOO_DEEP, "expression nested too deeply");
            return None;
        }
        self.depth += 1;
        let expr = self.parse_call_chain();
        self.depth -= 1;
        expr
    }

    fn parse_call_chain(&mut self) -> Option<Expr> {
        let mut expr = self.parse_primary()?;
        while self.eat(SyntaxKind::L_PAREN) {
            let mut args = Vec::new();
            if !self.at(SyntaxKind::R_PAREN) {
                loop {
                    args.push(self.parse_expr()?);
                    if !self.eat(SyntaxKind::COMMA) {
                        break;
                    }
                }
            }
            let close = self.expect(SyntaxKind::R_PAREN, codes::EXPECTED_DELIMITER)?;
            let range = expr.range().cover(close.range);
            expr = Expr::Call {
                callee: Box::new(expr),
                args,
                range,
            };
        }
        Some(expr)
    }

    fn parse_primary(&mut self) -> Option<Expr> {
        let Some(token) = self.current() else {
            self.error_expected("expression");
            return None;
        };
        match token.kind {
            SyntaxKind::IDENT => {
                self.bump();
                Some(Expr::Name {
                    name: self.intern(token.text),
                    range: token.range,
                })
            }
            SyntaxKind::INTEGER => {
                self.bump();
                match token.text.parse::<i64>() {
                    Ok(value) => Some(Expr::Integer {
                        value,
                        range: token.range,
                    }),
                    Err(_) => {
                        self.report(
                            codes::UNEXPECTED_TOKEN,
                            "integer literal is too large",
                            token.range,
                        );
                        None
                    }
                }
            }
            SyntaxKind::STRING => {
                self.bump();
                Some(Expr::String {
                    value: unescape(&token.text[1..token.text.len() - 1]),
                    range: token.range,
                })
            }
            SyntaxKind::UNTERMINATED_STRING => {
                self.bump();
                self.report(codes::UNTERMINATED, "unterminated string literal", token.range);
                None
            }
            SyntaxKind::L_PAREN => {
                self.bump();
                let inner = self.parse_expr()?;
                self.expect(SyntaxKind::R_PAREN, codes::EXPECTED_DELIMITER)?;
                Some(inner)
            }
            _ => {
                self.error_expected("expression");
                None
            }
        }
    }

    // =========================================================================
    // Blocks and recovery
    // =========================================================================

    /// Skip a balanced `{ ... }` block, returning the range between the braces.
    fn skip_block(&mut self) -> Option<TextRange> {
        let Some(open) = self.expect(SyntaxKind::L_BRACE, codes::UNEXPECTED_TOKEN) else {
            self.recover();
            return None;
        };
        let mut depth = 1usize;
        while let Some(token) = self.bump() {
            match token.kind {
                SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_BRACE => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(TextRange::new(open.range.end(), token.range.start()));
                    }
                }
                _ => {}
            }
        }
        self.report(codes::UNTERMINATED, "unterminated block", open.range);
        None
    }

    /// Skip to a point the top level can resume from: after a `;` or a closed
    /// block, or before a declaration keyword.
    fn recover(&mut self) {
        let mut depth = 0usize;
        while let Some(token) = self.current() {
            match token.kind {
                kind if depth == 0 && kind.is_decl_start() => return,
                SyntaxKind::SEMICOLON if depth == 0 => {
                    self.bump();
                    return;
                }
                SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_BRACE => {
                    self.bump();
                    if depth <= 1 {
                        return;
                    }
                    depth -= 1;
                    continue;
                }
                _ => {}
            }
            self.bump();
        }
    }

    fn finish_with_semicolon(&mut self, kind: DeclKind, start: TextSize) {
        let terminated = self
            .expect(SyntaxKind::SEMICOLON, codes::EXPECTED_DELIMITER)
            .is_some();
        self.push_decl(kind, start);
        if !terminated {
            self.recover();
        }
    }

    fn push_decl(&mut self, kind: DeclKind, start: TextSize) {
        let range = TextRange::new(start, self.last_end());
        self.decls.push(Decl::new(kind, self.buffer, range));
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Offset of the next unconsumed token, or the buffer end.
    fn offset(&self) -> TextSize {
        self.current().map_or(self.len, |t| t.range.start())
    }

    fn start(&self) -> TextSize {
        self.offset()
    }

    fn last_end(&self) -> TextSize {
        match self.pos.checked_sub(1).and_then(|idx| self.tokens.get(idx)) {
            Some(token) => token.range.end(),
            None => self.offset(),
        }
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind, code: &'static str) -> Option<Token<'a>> {
        if self.at(kind) {
            return self.bump();
        }
        let found = self.found();
        self.report(
            code,
            format!("expected {}, found {}", kind.describe(), found),
            self.here(),
        );
        None
    }

    fn expect_ident(&mut self, what: &str) -> Option<Name> {
        if self.at(SyntaxKind::IDENT) {
            return self.bump().map(|t| self.intern(t.text));
        }
        self.error_expected(what);
        None
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    fn found(&self) -> &'static str {
        self.current()
            .map_or("end of file", |token| token.kind.describe())
    }

    fn here(&self) -> TextRange {
        self.current()
            .map_or(TextRange::empty(self.len), |token| token.range)
    }

    fn error_expected(&self, what: &str) {
        let message = format!("expected {}, found {}", what, self.found());
        self.report(codes::UNEXPECTED_TOKEN, message, self.here());
    }

    fn error_here(&self, code: &'static str, message: &str) {
        self.report(code, message, self.here());
    }

    fn report(&self, code: &'static str, message: impl Into<std::sync::Arc<str>>, range: TextRange) {
        self.ctx
            .diagnostics
            .report(Diagnostic::error(code, message).at(self.buffer, range));
    }

    fn intern(&self, text: &str) -> Name {
        self.ctx.interner.intern(text)
    }
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
