//! FILENAME: engine/src/interp.rs
//! PURPOSE: Bottom-up tree rewrite that simplifies a parsed expression.
//! CONTEXT: Children are interpreted first, then the parent is rebuilt from
//! the simplified children. The input tree is never mutated; every rewrite
//! allocates new nodes in the same arena, so both trees coexist until the
//! arena is dropped.
//!
//! POLICY (applied uniformly, one pass, no fixpoint iteration):
//! - Both operands numeric: compute. Mixed Integer/Real promotes to Real;
//!   inexact integer division stays exact as a reduced fraction node;
//!   integer arithmetic is checked and overflow is a typed error.
//! - At least one operand symbolic: a fixed table of algebraic identities
//!   (x+0, x*1, x*0, x^1, x^0, 1^x, 0^x, double negation, unary plus),
//!   then reconstruction from the simplified children. No factoring, no
//!   collecting of like terms, no expansion.
//! - Calls: a unary builtin over one numeric argument computes (abs of an
//!   Integer stays exact); everything else is rebuilt unchanged.

use parser::ast::{Expr, OpType};
use parser::builtins::BuiltinFunction;
use parser::{ExprArena, NodeId};

use crate::error::EvalError;

/// The simplifier. Borrows the arena that owns the tree being rewritten and
/// allocates the result tree into it.
pub struct Interp<'a> {
    arena: &'a mut ExprArena,
}

impl<'a> Interp<'a> {
    pub fn new(arena: &'a mut ExprArena) -> Self {
        Interp { arena }
    }

    /// Simplifies a whole tree and returns the root of the rewritten tree.
    pub fn run(&mut self, root: NodeId) -> Result<NodeId, EvalError> {
        self.interp(root)
    }

    fn interp(&mut self, id: NodeId) -> Result<NodeId, EvalError> {
        match self.arena.get(id).clone() {
            // Leaves (and the whole-tree Empty sentinel) are already simplified.
            Expr::Integer(_) | Expr::Real(_) | Expr::Symbol(_) | Expr::Empty => Ok(id),

            Expr::UnaryOp { op, operand } => {
                let operand = self.interp(operand)?;
                self.interp_unaryop(op, operand)
            }

            Expr::BinOp { left, op, right } => {
                let left = self.interp(left)?;
                let right = self.interp(right)?;
                if self.arena.is_numeric(left) && self.arena.is_numeric(right) {
                    self.interp_numeric_binop(op, left, right)
                } else {
                    self.interp_symbolic_binop(op, left, right)
                }
            }

            Expr::Call { func, args } => {
                let mut simplified = Vec::with_capacity(args.len());
                for arg in args {
                    simplified.push(self.interp(arg)?);
                }
                self.interp_call(func, simplified)
            }
        }
    }

    fn interp_unaryop(&mut self, op: OpType, operand: NodeId) -> Result<NodeId, EvalError> {
        // Unary plus is always eliminated.
        if op == OpType::UAdd {
            return Ok(operand);
        }

        match self.arena.get(operand).clone() {
            Expr::Integer(v) => {
                let v = v.checked_neg().ok_or(EvalError::IntegerOverflow)?;
                Ok(self.arena.integer(v))
            }
            Expr::Real(v) => Ok(self.arena.real(-v)),
            // Double negation: -(-x) = x.
            Expr::UnaryOp {
                op: OpType::USub,
                operand: inner,
            } => Ok(inner),
            _ => Ok(self.arena.unaryop(OpType::USub, operand)),
        }
    }

    /// Both operands are leaf-numeric: compute directly.
    fn interp_numeric_binop(
        &mut self,
        op: OpType,
        left: NodeId,
        right: NodeId,
    ) -> Result<NodeId, EvalError> {
        if op == OpType::Pow {
            return self.interp_binop_pow(left, right);
        }

        if let (Expr::Integer(a), Expr::Integer(b)) =
            (self.arena.get(left), self.arena.get(right))
        {
            let (a, b) = (*a, *b);
            return match op {
                OpType::Add => {
                    let v = a.checked_add(b).ok_or(EvalError::IntegerOverflow)?;
                    Ok(self.arena.integer(v))
                }
                OpType::Sub => {
                    let v = a.checked_sub(b).ok_or(EvalError::IntegerOverflow)?;
                    Ok(self.arena.integer(v))
                }
                OpType::Mul => {
                    let v = a.checked_mul(b).ok_or(EvalError::IntegerOverflow)?;
                    Ok(self.arena.integer(v))
                }
                OpType::Div => {
                    if b == 0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    match a.checked_rem(b) {
                        Some(0) => {
                            let v = a.checked_div(b).ok_or(EvalError::IntegerOverflow)?;
                            Ok(self.arena.integer(v))
                        }
                        // Inexact quotient stays exact as a fraction node.
                        Some(_) => self.make_fraction(a, b),
                        // i64::MIN / -1
                        None => Err(EvalError::IntegerOverflow),
                    }
                }
                OpType::Pow | OpType::UAdd | OpType::USub => {
                    unreachable!("not a binary arithmetic operator")
                }
            };
        }

        // Mixed Integer/Real promotes to Real.
        let a = self.leaf_f64(left);
        let b = self.leaf_f64(right);
        let v = match op {
            OpType::Add => a + b,
            OpType::Sub => a - b,
            OpType::Mul => a * b,
            // Real division follows IEEE-754.
            OpType::Div => a / b,
            OpType::Pow | OpType::UAdd | OpType::USub => {
                unreachable!("not a binary arithmetic operator")
            }
        };
        Ok(self.arena.real(v))
    }

    /// Exponentiation over numeric operands.
    pub fn interp_binop_pow(&mut self, base: NodeId, exp: NodeId) -> Result<NodeId, EvalError> {
        if let (Expr::Integer(b), Expr::Integer(e)) =
            (self.arena.get(base), self.arena.get(exp))
        {
            let (b, e) = (*b, *e);
            if e >= 0 {
                // 0^0 = 1 by convention.
                let e: u32 = e.try_into().map_err(|_| EvalError::IntegerOverflow)?;
                let v = b.checked_pow(e).ok_or(EvalError::IntegerOverflow)?;
                return Ok(self.arena.integer(v));
            }

            // Negative exponent: the exact reciprocal 1 / b^|e|.
            let mag: u32 = e
                .unsigned_abs()
                .try_into()
                .map_err(|_| EvalError::IntegerOverflow)?;
            let denom = b.checked_pow(mag).ok_or(EvalError::IntegerOverflow)?;
            if denom == 0 {
                return Err(EvalError::DivisionByZero);
            }
            return self.make_fraction(1, denom);
        }

        // Any Real operand: floating-point power.
        let b = self.leaf_f64(base);
        let e = self.leaf_f64(exp);
        Ok(self.arena.real(b.powf(e)))
    }

    /// At least one operand is symbolic: apply the identity table, then
    /// fall back to reconstructing the node from its simplified children.
    fn interp_symbolic_binop(
        &mut self,
        op: OpType,
        left: NodeId,
        right: NodeId,
    ) -> Result<NodeId, EvalError> {
        match op {
            OpType::Add => {
                if self.is_zero(right) {
                    return Ok(left);
                }
                if self.is_zero(left) {
                    return Ok(right);
                }
            }
            OpType::Mul => {
                if self.is_one(right) {
                    return Ok(left);
                }
                if self.is_one(left) {
                    return Ok(right);
                }
                if self.is_zero(right) {
                    return Ok(right);
                }
                if self.is_zero(left) {
                    return Ok(left);
                }
            }
            OpType::Pow => {
                if self.is_one(right) {
                    return Ok(left);
                }
                if self.is_zero(right) {
                    return Ok(self.arena.integer(1));
                }
                if self.is_one(left) {
                    return Ok(left);
                }
                if self.is_zero(left) {
                    return Ok(left);
                }
            }
            _ => {}
        }
        Ok(self.arena.binop(op, left, right))
    }

    fn interp_call(
        &mut self,
        func: BuiltinFunction,
        args: Vec<NodeId>,
    ) -> Result<NodeId, EvalError> {
        if args.len() == 1 && self.arena.is_numeric(args[0]) {
            let arg = args[0];

            // abs of an Integer stays exact.
            if func == BuiltinFunction::Abs {
                if let Expr::Integer(v) = *self.arena.get(arg) {
                    let v = v.checked_abs().ok_or(EvalError::IntegerOverflow)?;
                    return Ok(self.arena.integer(v));
                }
            }

            let x = self.leaf_f64(arg);
            let v = match func {
                BuiltinFunction::Sqrt => x.sqrt(),
                BuiltinFunction::Exp => x.exp(),
                BuiltinFunction::Ln => x.ln(),
                BuiltinFunction::Log => x.log10(),
                BuiltinFunction::Sin => x.sin(),
                BuiltinFunction::Cos => x.cos(),
                BuiltinFunction::Tan => x.tan(),
                BuiltinFunction::Asin => x.asin(),
                BuiltinFunction::Acos => x.acos(),
                BuiltinFunction::Atan => x.atan(),
                BuiltinFunction::Abs => x.abs(),
            };
            return Ok(self.arena.real(v));
        }

        // Wrong arity or symbolic arguments: keep the call, rebuilt from
        // its simplified arguments.
        Ok(self.arena.call(func, args))
    }

    /// Builds a gcd-reduced fraction node. The sign lives on the numerator;
    /// a denominator of 1 (or a numerator of 0) collapses to an Integer.
    fn make_fraction(&mut self, num: i64, den: i64) -> Result<NodeId, EvalError> {
        debug_assert!(den != 0);
        if num == 0 {
            return Ok(self.arena.integer(0));
        }

        let g = gcd(num.unsigned_abs(), den.unsigned_abs());
        let n = i64::try_from(num.unsigned_abs() / g).map_err(|_| EvalError::IntegerOverflow)?;
        let d = i64::try_from(den.unsigned_abs() / g).map_err(|_| EvalError::IntegerOverflow)?;
        let n = if (num < 0) != (den < 0) { -n } else { n };

        if d == 1 {
            return Ok(self.arena.integer(n));
        }
        let n = self.arena.integer(n);
        let d = self.arena.integer(d);
        Ok(self.arena.binop(OpType::Div, n, d))
    }

    /// Numeric leaf value. Only called after an `is_numeric` check.
    fn leaf_f64(&self, id: NodeId) -> f64 {
        match *self.arena.get(id) {
            Expr::Integer(v) => v as f64,
            Expr::Real(v) => v,
            _ => unreachable!("caller checked is_numeric"),
        }
    }

    fn is_zero(&self, id: NodeId) -> bool {
        match *self.arena.get(id) {
            Expr::Integer(v) => v == 0,
            Expr::Real(v) => v == 0.0,
            _ => false,
        }
    }

    fn is_one(&self, id: NodeId) -> bool {
        match *self.arena.get(id) {
            Expr::Integer(v) => v == 1,
            Expr::Real(v) => v == 1.0,
            _ => false,
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
