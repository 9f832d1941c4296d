//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the expression parser.
//! CONTEXT: This crate owns the front half of the pipeline: tokens, lexer,
//! the arena-backed AST, the builtin name tables, and the parser itself.
//!
//! PIPELINE: Source text --> Lexer --> Tokens --> Parser --> AST --> Interpreter
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, ^ (power, right-associative)
//! - Unary sign: -x, +x
//! - Integer and real literals
//! - Free symbols and builtin constants (pi, e)
//! - Builtin function calls: sin(x), sqrt(2), ...
//! - Parentheses for grouping

pub mod arena;
pub mod ast;
pub mod builtins;
pub mod lexer;
pub mod parser;
pub mod token;

// Register the separate tests module
#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use arena::{ExprArena, NodeId};
pub use ast::{Expr, OpType};
pub use builtins::{is_builtin_constant, is_builtin_function, BuiltinFunction, BUILTIN_CONSTANTS};
pub use lexer::Lexer;
pub use parser::{parse, ParseError, ParseErrorKind, ParseResult, Parser};
pub use token::Token;
