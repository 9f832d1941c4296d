//! FILENAME: parser/src/ast.rs
//! PURPOSE: Defines the expression tree and the structural predicates on it.
//! CONTEXT: After the Lexer tokenizes an expression string, the Parser
//! converts those tokens into this tree. The interpreter then rewrites the
//! tree into simplified form and the printer renders it back to infix text.
//!
//! SUPPORTED EXPRESSIONS:
//! - Literals: 64-bit integers and 64-bit floats
//! - Free symbols: x, width, _tmp
//! - Binary operations: +, -, *, /, ^
//! - Unary sign: +x, -x (distinct operators, not subtraction-from-zero)
//! - Function calls: sin(x), sqrt(2)
//!
//! Children are `NodeId` handles into the arena that owns the whole tree.
//! Nodes are immutable once constructed; simplification always builds new
//! nodes from already-simplified children.

use crate::arena::{ExprArena, NodeId};
use crate::builtins::BuiltinFunction;

/// Operator kinds for binary and unary nodes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OpType {
    Add,
    Sub,
    Mul,
    Div,
    Pow,

    // Unary sign operators
    UAdd,
    USub,
}

impl OpType {
    /// The fixed precedence table shared by the parser and the printer.
    pub fn precedence(self) -> u8 {
        match self {
            OpType::Pow => 4,
            OpType::UAdd | OpType::USub => 3,
            OpType::Mul | OpType::Div => 2,
            OpType::Add | OpType::Sub => 1,
        }
    }

    /// The surface symbol used for rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            OpType::Add | OpType::UAdd => "+",
            OpType::Sub | OpType::USub => "-",
            OpType::Mul => "*",
            OpType::Div => "/",
            OpType::Pow => "^",
        }
    }

    /// The tag used by the debug renderer.
    pub fn debug_name(self) -> &'static str {
        match self {
            OpType::Add => "Add",
            OpType::Sub => "Sub",
            OpType::Mul => "Mul",
            OpType::Div => "Div",
            OpType::Pow => "Pow",
            OpType::UAdd => "UAdd",
            OpType::USub => "USub",
        }
    }
}

impl std::fmt::Display for OpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One node of the expression tree.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Integer(i64),
    Real(f64),
    Symbol(String),
    BinOp {
        left: NodeId,
        op: OpType,
        right: NodeId,
    },
    UnaryOp {
        op: OpType,
        operand: NodeId,
    },
    /// A call whose callee was validated at construction time; an unknown
    /// name can never reach evaluation.
    Call {
        func: BuiltinFunction,
        args: Vec<NodeId>,
    },
    /// Sentinel for "no expression produced" (blank input). Only ever a
    /// whole-tree result, never a child of another node.
    Empty,
}

// Structural predicates. These live on the arena because children are
// handles: every comparison is by shape and value, never by handle identity,
// since simplification rebuilds nodes instead of sharing them.
impl ExprArena {
    /// Deep structural equality (shape, operators, values, names).
    pub fn structural_eq(&self, a: NodeId, b: NodeId) -> bool {
        match (self.get(a), self.get(b)) {
            (Expr::Integer(x), Expr::Integer(y)) => x == y,
            (Expr::Real(x), Expr::Real(y)) => x == y,
            (Expr::Symbol(x), Expr::Symbol(y)) => x == y,
            (
                Expr::BinOp { left: l1, op: o1, right: r1 },
                Expr::BinOp { left: l2, op: o2, right: r2 },
            ) => o1 == o2 && self.structural_eq(*l1, *l2) && self.structural_eq(*r1, *r2),
            (
                Expr::UnaryOp { op: o1, operand: e1 },
                Expr::UnaryOp { op: o2, operand: e2 },
            ) => o1 == o2 && self.structural_eq(*e1, *e2),
            (
                Expr::Call { func: f1, args: a1 },
                Expr::Call { func: f2, args: a2 },
            ) => {
                f1 == f2
                    && a1.len() == a2.len()
                    && a1.iter().zip(a2).all(|(x, y)| self.structural_eq(*x, *y))
            }
            (Expr::Empty, Expr::Empty) => true,
            _ => false,
        }
    }

    /// Shallow match: same node kind and, for operator nodes, same operator.
    pub fn same_kind(&self, a: NodeId, b: NodeId) -> bool {
        match (self.get(a), self.get(b)) {
            (Expr::Integer(_), Expr::Integer(_)) => true,
            (Expr::Real(_), Expr::Real(_)) => true,
            (Expr::Symbol(_), Expr::Symbol(_)) => true,
            (Expr::BinOp { op: o1, .. }, Expr::BinOp { op: o2, .. }) => o1 == o2,
            (Expr::UnaryOp { op: o1, .. }, Expr::UnaryOp { op: o2, .. }) => o1 == o2,
            (Expr::Call { .. }, Expr::Call { .. }) => true,
            (Expr::Empty, Expr::Empty) => true,
            _ => false,
        }
    }

    /// True if `needle` occurs anywhere inside `tree` by structural match.
    pub fn contains(&self, tree: NodeId, needle: NodeId) -> bool {
        if self.structural_eq(tree, needle) {
            return true;
        }
        match self.get(tree) {
            Expr::BinOp { left, right, .. } => {
                self.contains(*left, needle) || self.contains(*right, needle)
            }
            Expr::UnaryOp { operand, .. } => self.contains(*operand, needle),
            Expr::Call { args, .. } => args.iter().any(|&arg| self.contains(arg, needle)),
            _ => false,
        }
    }

    /// Pre-order flattening of a subtree into a flat list of handles.
    pub fn flatten(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.flatten_into(id, &mut out);
        out
    }

    fn flatten_into(&self, id: NodeId, out: &mut Vec<NodeId>) {
        out.push(id);
        match self.get(id) {
            Expr::BinOp { left, right, .. } => {
                self.flatten_into(*left, out);
                self.flatten_into(*right, out);
            }
            Expr::UnaryOp { operand, .. } => self.flatten_into(*operand, out),
            Expr::Call { args, .. } => {
                for &arg in args {
                    self.flatten_into(arg, out);
                }
            }
            _ => {}
        }
    }

    /// True only for leaf numeric nodes (Integer or Real).
    pub fn is_numeric(&self, id: NodeId) -> bool {
        matches!(self.get(id), Expr::Integer(_) | Expr::Real(_))
    }

    /// True for an exact-rational node: an Integer / Integer division.
    pub fn is_fraction(&self, id: NodeId) -> bool {
        match self.get(id) {
            Expr::BinOp { left, op: OpType::Div, right } => {
                matches!(self.get(*left), Expr::Integer(_))
                    && matches!(self.get(*right), Expr::Integer(_))
            }
            _ => false,
        }
    }

    /// Numeric coercion for comparisons and printing. Covers integers,
    /// reals, and fraction nodes; anything symbolic yields None.
    pub fn as_f64(&self, id: NodeId) -> Option<f64> {
        match self.get(id) {
            Expr::Integer(v) => Some(*v as f64),
            Expr::Real(v) => Some(*v),
            Expr::BinOp { left, op: OpType::Div, right } => {
                match (self.get(*left), self.get(*right)) {
                    (Expr::Integer(n), Expr::Integer(d)) => Some(*n as f64 / *d as f64),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
