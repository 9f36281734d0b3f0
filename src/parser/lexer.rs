//! Logos-based lexer for Weft
//!
//! Fast tokenization using the logos crate. Offsets are absolute: lexing can
//! start in the middle of a buffer and still report positions in buffer
//! coordinates.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: TextSize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_base(input, TextSize::new(0))
    }

    /// Lex `input`, reporting offsets shifted by `base`.
    pub fn with_base(input: &'a str, base: TextSize) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: base,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let range = TextRange::at(self.offset, TextSize::of(text));
        self.offset = range.end();

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, range })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[_\p{XID_Start}]\p{XID_Continue}*")]
    Ident,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    // Loses to `String` whenever the closing quote is present.
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,
    #[token("@")]
    At,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("func")]
    FuncKw,
    #[token("import")]
    ImportKw,
    #[token("ir")]
    IrKw,
    #[token("let")]
    LetKw,
    #[token("struct")]
    StructKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::Integer => SyntaxKind::INTEGER,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::UnterminatedString => SyntaxKind::UNTERMINATED_STRING,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::At => SyntaxKind::AT,
            LogosToken::FuncKw => SyntaxKind::FUNC_KW,
            LogosToken::ImportKw => SyntaxKind::IMPORT_KW,
            LogosToken::IrKw => SyntaxKind::IR_KW,
            LogosToken::LetKw => SyntaxKind::LET_KW,
            LogosToken::StructKw => SyntaxKind::STRUCT_KW,
        }
    }
}
