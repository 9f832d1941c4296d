//! FILENAME: engine/src/printer.rs
//! PURPOSE: Renders an AST back to minimally-parenthesized infix text.
//! CONTEXT: Driven by the same `OpType::precedence` table the parser
//! encodes in its call structure, so printed output re-parses to the same
//! tree. A child operator with strictly lower precedence than its parent is
//! wrapped; at equal precedence only the right operand of left-associative
//! `-`/`/` and the left operand of right-associative `^` need parentheses.

use parser::ast::{Expr, OpType};
use parser::{ExprArena, NodeId};

/// Renders a tree as infix text. The Empty sentinel renders as "".
pub fn ast_to_string(arena: &ExprArena, id: NodeId) -> String {
    let mut out = String::new();
    render(arena, id, &mut out);
    out
}

/// Renders a tree with explicit node-kind tags, for diagnostics only.
pub fn ast_to_debug_string(arena: &ExprArena, id: NodeId) -> String {
    match arena.get(id) {
        Expr::Integer(v) => format!("Integer({})", v),
        Expr::Real(v) => format!("Real({})", format_real(*v)),
        Expr::Symbol(name) => format!("Symbol({})", name),
        Expr::BinOp { left, op, right } => format!(
            "{}({}, {})",
            op.debug_name(),
            ast_to_debug_string(arena, *left),
            ast_to_debug_string(arena, *right)
        ),
        Expr::UnaryOp { op, operand } => {
            format!("{}({})", op.debug_name(), ast_to_debug_string(arena, *operand))
        }
        Expr::Call { func, args } => {
            let rendered: Vec<String> = args
                .iter()
                .map(|&arg| ast_to_debug_string(arena, arg))
                .collect();
            format!("Call({}, [{}])", func.name(), rendered.join(", "))
        }
        Expr::Empty => "Empty".to_string(),
    }
}

fn render(arena: &ExprArena, id: NodeId, out: &mut String) {
    match arena.get(id) {
        Expr::Integer(v) => out.push_str(&v.to_string()),
        Expr::Real(v) => out.push_str(&format_real(*v)),
        Expr::Symbol(name) => out.push_str(name),
        Expr::Empty => {}

        Expr::BinOp { left, op, right } => {
            let prec = op.precedence();

            let wrap_left = match operator_precedence(arena, *left) {
                Some(child) => child < prec || (child == prec && *op == OpType::Pow),
                // A negative literal base would re-parse as a unary sign
                // applied to the whole power.
                None => *op == OpType::Pow && is_negative_literal(arena, *left),
            };
            let wrap_right = match operator_precedence(arena, *right) {
                Some(child) => {
                    child < prec
                        || (child == prec && matches!(op, OpType::Sub | OpType::Div))
                }
                None => false,
            };

            render_child(arena, *left, wrap_left, out);
            out.push_str(op.symbol());
            render_child(arena, *right, wrap_right, out);
        }

        Expr::UnaryOp { op, operand } => {
            out.push_str(op.symbol());
            let wrap = match arena.get(*operand) {
                Expr::BinOp { op: child, .. } => child.precedence() <= op.precedence(),
                _ => false,
            };
            render_child(arena, *operand, wrap, out);
        }

        Expr::Call { func, args } => {
            out.push_str(func.name());
            out.push('(');
            for (i, &arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                render(arena, arg, out);
            }
            out.push(')');
        }
    }
}

fn render_child(arena: &ExprArena, id: NodeId, wrap: bool, out: &mut String) {
    if wrap {
        out.push('(');
        render(arena, id, out);
        out.push(')');
    } else {
        render(arena, id, out);
    }
}

/// Precedence of a child's top-level operator; atoms have none and never
/// need parentheses.
fn operator_precedence(arena: &ExprArena, id: NodeId) -> Option<u8> {
    match arena.get(id) {
        Expr::BinOp { op, .. } | Expr::UnaryOp { op, .. } => Some(op.precedence()),
        _ => None,
    }
}

fn is_negative_literal(arena: &ExprArena, id: NodeId) -> bool {
    match *arena.get(id) {
        Expr::Integer(v) => v < 0,
        Expr::Real(v) => v < 0.0,
        _ => false,
    }
}

/// Formats a Real with a forced decimal point so the numeric kind survives
/// re-parsing (2.0, not 2).
fn format_real(v: f64) -> String {
    let s = format!("{}", v);
    if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{}.0", s)
    }
}
