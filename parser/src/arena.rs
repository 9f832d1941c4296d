//! FILENAME: parser/src/arena.rs
//! PURPOSE: Arena storage for expression nodes.
//! CONTEXT: Every node built during one evaluation session lives in a single
//! ExprArena. Allocation is monotonic: nodes are appended, never freed
//! individually, and never mutated after construction. Dropping the arena
//! releases the whole session at once; that is the only deallocation path.

use crate::ast::Expr;
use crate::builtins::BuiltinFunction;

/// A handle to a node inside an [`ExprArena`].
///
/// Handles are plain indices: cheap to copy and valid for the entire
/// lifetime of the arena that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Storage for all expression nodes of one evaluation session.
#[derive(Debug, Default)]
pub struct ExprArena {
    nodes: Vec<Expr>,
}

impl ExprArena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arena with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        ExprArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a node and returns its handle.
    pub fn alloc(&mut self, node: Expr) -> NodeId {
        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "arena capacity exceeded");
        self.nodes.push(node);
        NodeId(index as u32)
    }

    /// Gets the node behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle belongs to a different arena and is out of range.
    pub fn get(&self, id: NodeId) -> &Expr {
        &self.nodes[id.index()]
    }

    /// Returns the number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // === Convenience constructors ===

    pub fn integer(&mut self, value: i64) -> NodeId {
        self.alloc(Expr::Integer(value))
    }

    pub fn real(&mut self, value: f64) -> NodeId {
        self.alloc(Expr::Real(value))
    }

    pub fn symbol(&mut self, name: impl Into<String>) -> NodeId {
        self.alloc(Expr::Symbol(name.into()))
    }

    pub fn binop(&mut self, op: crate::ast::OpType, left: NodeId, right: NodeId) -> NodeId {
        self.alloc(Expr::BinOp { left, op, right })
    }

    pub fn unaryop(&mut self, op: crate::ast::OpType, operand: NodeId) -> NodeId {
        self.alloc(Expr::UnaryOp { op, operand })
    }

    pub fn call(&mut self, func: BuiltinFunction, args: Vec<NodeId>) -> NodeId {
        self.alloc(Expr::Call { func, args })
    }

    pub fn empty(&mut self) -> NodeId {
        self.alloc(Expr::Empty)
    }
}
