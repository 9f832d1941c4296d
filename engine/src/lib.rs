//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the symbolic-expression engine.
//! CONTEXT: Ties the pipeline together: parse into a fresh arena, simplify,
//! render. Each evaluation owns its arena exclusively and drops it on the
//! way out; only the rendered text escapes.

pub mod error;
pub mod interp;
pub mod printer;


// Re-export commonly used types at the crate root
pub use error::{EngineError, EvalError};
pub use interp::Interp;
pub use printer::{ast_to_debug_string, ast_to_string};

// The engine's consumers usually need the parser types too.
pub use parser::{Expr, ExprArena, NodeId, OpType, ParseError, ParseErrorKind};

/// Evaluates one expression: lex + parse, simplify, render.
///
/// A blank input renders as the empty string. Every failure is a typed
/// [`EngineError`]; nothing panics on user input.
pub fn evaluate(source: &str) -> Result<String, EngineError> {
    let mut arena = ExprArena::new();

    let root = parser::parse(source, &mut arena)?;
    log::debug!("parsed {} nodes: {}", arena.len(), ast_to_debug_string(&arena, root));

    let result = Interp::new(&mut arena).run(root)?;
    log::debug!("simplified to {} nodes", arena.flatten(result).len());

    Ok(ast_to_string(&arena, result))
}

/// Diagnostic tree dump; not intended for round-tripping.
pub fn render_debug(arena: &ExprArena, id: NodeId) -> String {
    ast_to_debug_string(arena, id)
}
