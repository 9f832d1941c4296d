//! FILENAME: engine/src/error.rs
//! PURPOSE: Typed error taxonomy for the evaluation pipeline.
//! CONTEXT: Every failure is a value propagated to the evaluation boundary,
//! so a long-running host can recover per evaluation instead of terminating.

use parser::ParseError;
use thiserror::Error;

/// Arithmetic failures raised while simplifying a tree.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    IntegerOverflow,
}

/// Everything `evaluate` can report: a parse failure (lexical, syntax, or
/// literal-range) or an arithmetic failure.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
