//! FILENAME: parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a stream of Tokens into an AST.
//! CONTEXT: This is the second stage of the pipeline. It pulls tokens from
//! the Lexer and builds arena-owned expression nodes.
//!
//! GRAMMAR (precedence low -> high; power is right-associative):
//!   expr    --> term ( ("+" | "-") term )*
//!   term    --> unary ( ("*" | "/") unary )*
//!   unary   --> ("+" | "-") unary | power
//!   power   --> primary ( "^" unary )?
//!   primary --> NUMBER
//!             | IDENTIFIER ( "(" arguments? ")" )?
//!             | "(" expr ")"
//!   arguments --> expr ("," expr)*
//!
//! An identifier followed by "(" must name a builtin function; a bare
//! unknown identifier is accepted as a free symbol. Completely empty input
//! parses to the Empty node. Everything else that does not fit the grammar
//! is a typed error - one parse call yields exactly one AST or one error.

use crate::arena::{ExprArena, NodeId};
use crate::ast::OpType;
use crate::builtins::BuiltinFunction;
use crate::lexer::Lexer;
use crate::token::Token;

/// What went wrong, kept distinguishable so hosts can report precisely.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseErrorKind {
    /// An unrecognized character in the source text.
    Lexical,
    /// A grammar violation: unexpected token, unmatched parenthesis,
    /// malformed argument list, call to an unknown function name.
    Syntax,
    /// A numeric literal outside the 64-bit integer range.
    Range,
}

/// Parser errors with descriptive messages.
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        ParseError {
            kind,
            message: message.into(),
        }
    }

    fn syntax(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Syntax, message)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

/// The Parser pulls from the lexer and allocates nodes into the arena.
pub struct Parser<'a, 'b> {
    lexer: Lexer<'a>,
    arena: &'b mut ExprArena,
}

impl<'a, 'b> Parser<'a, 'b> {
    pub fn new(input: &'a str, arena: &'b mut ExprArena) -> Self {
        Parser {
            lexer: Lexer::new(input),
            arena,
        }
    }

    /// Parses the entire input and returns the root node.
    pub fn parse(&mut self) -> ParseResult<NodeId> {
        // Blank input is not an error; it produces the Empty sentinel.
        if self.lexer.peek_token() == Token::Eof {
            return Ok(self.arena.empty());
        }

        let expr = self.parse_expr()?;

        // Ensure we consumed all tokens.
        match self.lexer.next_token() {
            Token::Eof => Ok(expr),
            token => Err(ParseError::syntax(format!(
                "Unexpected token after expression: {}",
                token
            ))),
        }
    }

    /// Checks that the next token matches and consumes it.
    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        let token = self.lexer.next_token();
        if token == expected {
            Ok(())
        } else {
            Err(ParseError::syntax(format!(
                "Expected {}, found {}",
                expected, token
            )))
        }
    }

    /// Parses additive expressions (+ and -), left-associative.
    fn parse_expr(&mut self) -> ParseResult<NodeId> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.lexer.peek_token() {
                Token::Plus => OpType::Add,
                Token::Minus => OpType::Sub,
                _ => break,
            };

            self.lexer.next_token();
            let right = self.parse_term()?;
            left = self.arena.binop(op, left, right);
        }

        Ok(left)
    }

    /// Parses multiplicative expressions (* and /), left-associative.
    fn parse_term(&mut self) -> ParseResult<NodeId> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.lexer.peek_token() {
                Token::Asterisk => OpType::Mul,
                Token::Slash => OpType::Div,
                _ => break,
            };

            self.lexer.next_token();
            let right = self.parse_unary()?;
            left = self.arena.binop(op, left, right);
        }

        Ok(left)
    }

    /// Parses a leading sign. Recorded as its own operator (UAdd/USub),
    /// not as subtraction-from-zero.
    fn parse_unary(&mut self) -> ParseResult<NodeId> {
        let op = match self.lexer.peek_token() {
            Token::Plus => OpType::UAdd,
            Token::Minus => OpType::USub,
            _ => return self.parse_power(),
        };

        self.lexer.next_token();
        let operand = self.parse_unary()?;
        Ok(self.arena.unaryop(op, operand))
    }

    /// Parses exponentiation. Right-associative: a^b^c = a^(b^c), and the
    /// exponent may carry its own sign (2^-3).
    fn parse_power(&mut self) -> ParseResult<NodeId> {
        let left = self.parse_primary()?;

        if self.lexer.peek_token() == Token::Caret {
            self.lexer.next_token();
            let right = self.parse_unary()?;
            return Ok(self.arena.binop(OpType::Pow, left, right));
        }

        Ok(left)
    }

    /// Parses primary expressions: literals, symbols, calls, parentheses.
    fn parse_primary(&mut self) -> ParseResult<NodeId> {
        match self.lexer.next_token() {
            Token::Number { text, has_dot } => self.parse_number(&text, has_dot),

            Token::Identifier(name) => {
                if self.lexer.peek_token() == Token::LParen {
                    return self.parse_call(&name);
                }
                // Bare identifiers - builtin constants included - are
                // free symbols.
                Ok(self.arena.symbol(name))
            }

            Token::LParen => {
                let expr = self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }

            Token::Eof => Err(ParseError::syntax("Unexpected end of expression")),

            Token::Illegal(c) => Err(ParseError::new(
                ParseErrorKind::Lexical,
                format!("Unrecognized character: {}", c),
            )),

            token => Err(ParseError::syntax(format!("Unexpected token: {}", token))),
        }
    }

    /// Converts a numeric literal into an Integer or Real node.
    fn parse_number(&mut self, text: &str, has_dot: bool) -> ParseResult<NodeId> {
        if has_dot {
            let value: f64 = text.parse().map_err(|_| {
                ParseError::syntax(format!("Invalid numeric literal: {}", text))
            })?;
            Ok(self.arena.real(value))
        } else {
            let value: i64 = text.parse().map_err(|_| {
                ParseError::new(
                    ParseErrorKind::Range,
                    format!("Integer literal out of range: {}", text),
                )
            })?;
            Ok(self.arena.integer(value))
        }
    }

    /// Parses a function call like sin(x) or atan(y, x). The callee must
    /// be a recognized builtin; unknown call names are rejected here.
    fn parse_call(&mut self, name: &str) -> ParseResult<NodeId> {
        let func = BuiltinFunction::from_name(name).ok_or_else(|| {
            ParseError::syntax(format!("Unknown function: {}", name))
        })?;

        // Consume the '('.
        self.lexer.next_token();

        let mut args = Vec::new();

        // Handle an empty argument list.
        if self.lexer.peek_token() == Token::RParen {
            self.lexer.next_token();
            return Ok(self.arena.call(func, args));
        }

        args.push(self.parse_expr()?);

        while self.lexer.peek_token() == Token::Comma {
            self.lexer.next_token();
            args.push(self.parse_expr()?);
        }

        self.expect(Token::RParen)?;

        Ok(self.arena.call(func, args))
    }
}

/// Convenience function to parse an expression string directly.
pub fn parse(input: &str, arena: &mut ExprArena) -> ParseResult<NodeId> {
    let mut parser = Parser::new(input, arena);
    parser.parse()
}
