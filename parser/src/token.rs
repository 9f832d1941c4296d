//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A numeric literal. The raw text is kept so the parser can decide
    /// between Integer and Real (`has_dot`) and report out-of-range values.
    Number { text: String, has_dot: bool },
    /// A name: either a builtin function, a builtin constant, or a free symbol.
    /// Classification happens in the parser, never here.
    Identifier(String),

    // Operators
    Plus,
    Minus,
    Asterisk,
    Slash,
    Caret,

    // Delimiters
    LParen,
    RParen,
    Comma,
    Hash,

    // Special
    Eof,
    Illegal(char),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number { text, .. } => write!(f, "{}", text),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Hash => write!(f, "#"),
            Token::Eof => write!(f, "EOF"),
            Token::Illegal(c) => write!(f, "ILLEGAL({})", c),
        }
    }
}
