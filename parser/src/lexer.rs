//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the pipeline. It handles whitespace
//! skipping, numeric literals with at most one decimal point, identifiers,
//! and the single-character operator/delimiter set.
//!
//! SUPPORTED TOKENS:
//! - Numbers: 42, 3.14 (a second '.' ends the literal)
//! - Identifiers: letters, then letters/digits/underscores
//! - Single char: + - * / ^ ( ) , #
//!
//! The lexer keeps an explicit byte offset into the source so that
//! `peek_token` is a save/restore of the cursor around `next_token`.

use crate::token::Token;

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer { source, pos: 0 }
    }

    /// Returns the byte under the cursor without advancing, or None at end.
    pub fn current_char(&self) -> Option<char> {
        self.source.as_bytes().get(self.pos).map(|&b| b as char)
    }

    /// Advances the lexer and returns the next token.
    /// At end of input this returns `Token::Eof` repeatably.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = match self.current_char() {
            Some(c) => c,
            None => return Token::Eof,
        };

        match ch {
            '+' => self.single(Token::Plus),
            '-' => self.single(Token::Minus),
            '*' => self.single(Token::Asterisk),
            '/' => self.single(Token::Slash),
            '^' => self.single(Token::Caret),
            '(' => self.single(Token::LParen),
            ')' => self.single(Token::RParen),
            ',' => self.single(Token::Comma),
            '#' => self.single(Token::Hash),

            c if c.is_ascii_digit() => self.read_number(),
            c if is_letter(c) => self.read_identifier(),

            c => self.single(Token::Illegal(c)),
        }
    }

    /// Returns the next token without advancing the lexer.
    pub fn peek_token(&mut self) -> Token {
        let saved = self.pos;
        let token = self.next_token();
        self.pos = saved;
        token
    }

    fn single(&mut self, token: Token) -> Token {
        self.pos += 1;
        token
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if !ch.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.pos += 1;
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.pos += 1;
            } else {
                break;
            }
        }

        Token::Number {
            text: self.source[start..self.pos].to_string(),
            has_dot,
        }
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.pos;

        while let Some(ch) = self.current_char() {
            if is_letter(ch) || ch.is_ascii_digit() {
                self.pos += 1;
            } else {
                break;
            }
        }

        // Builtin function and constant names are identifiers too;
        // telling them apart from free symbols is the parser's job.
        Token::Identifier(self.source[start..self.pos].to_string())
    }
}

/// Returns true if `ch` can start an identifier.
fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}
