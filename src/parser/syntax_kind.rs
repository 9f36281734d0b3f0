//! Token kinds of the Weft token grammar.

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - skipped by the parser)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // identifier
    INTEGER, // 42
    STRING,  // "hello"
    /// A string literal cut off by a newline or the end of the buffer.
    UNTERMINATED_STRING,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,   // {
    R_BRACE,   // }
    L_PAREN,   // (
    R_PAREN,   // )
    SEMICOLON, // ;
    COLON,     // :
    DOT,       // .
    COMMA,     // ,
    EQ,        // =
    AT,        // @

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    FUNC_KW,
    IMPORT_KW,
    IR_KW,
    LET_KW,
    STRUCT_KW,

    /// Anything the lexer could not classify.
    ERROR,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::WHITESPACE | SyntaxKind::LINE_COMMENT | SyntaxKind::BLOCK_COMMENT
        )
    }

    /// Keywords that open a top-level declaration.
    pub fn is_decl_start(self) -> bool {
        matches!(
            self,
            SyntaxKind::FUNC_KW
                | SyntaxKind::IMPORT_KW
                | SyntaxKind::IR_KW
                | SyntaxKind::LET_KW
                | SyntaxKind::STRUCT_KW
        )
    }

    /// Human readable description used in "expected X, found Y" messages.
    pub fn describe(self) -> &'static str {
        match self {
            SyntaxKind::WHITESPACE => "whitespace",
            SyntaxKind::LINE_COMMENT | SyntaxKind::BLOCK_COMMENT => "comment",
            SyntaxKind::IDENT => "identifier",
            SyntaxKind::INTEGER => "integer literal",
            SyntaxKind::STRING => "string literal",
            SyntaxKind::UNTERMINATED_STRING => "unterminated string literal",
            SyntaxKind::L_BRACE => "'{'",
            SyntaxKind::R_BRACE => "'}'",
            SyntaxKind::L_PAREN => "'('",
            SyntaxKind::R_PAREN => "')'",
            SyntaxKind::SEMICOLON => "';'",
            SyntaxKind::COLON => "':'",
            SyntaxKind::DOT => "'.'",
            SyntaxKind::COMMA => "','",
            SyntaxKind::EQ => "'='",
            SyntaxKind::AT => "'@'",
            SyntaxKind::FUNC_KW => "'func'",
            SyntaxKind::IMPORT_KW => "'import'",
            SyntaxKind::IR_KW => "'ir'",
            SyntaxKind::LET_KW => "'let'",
            SyntaxKind::STRUCT_KW => "'struct'",
            SyntaxKind::ERROR => "invalid character",
        }
    }
}
