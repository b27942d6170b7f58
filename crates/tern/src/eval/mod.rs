//! Expression evaluation

pub mod assign;
pub mod index;
pub mod interp;
pub mod literal;
pub mod logic;

use crate::ast::{Expr, UnOp};
use crate::context::EvalContext;
use crate::dispatch;
use crate::environment::VariableStore;
use crate::error::{EvalError, Result};
use crate::value::Value;

/// Trait for evaluating AST nodes to values.
///
/// This is the core abstraction of the tree-walking evaluator: each
/// node kind the external parser delivers evaluates in a variable store
/// and a context, strictly left to right within a node.
pub trait Evaluate {
    /// Evaluate this node.
    fn eval(&self, vars: &mut dyn VariableStore, ctx: &EvalContext) -> Result<Value>;
}

impl Evaluate for Expr {
    fn eval(&self, vars: &mut dyn VariableStore, ctx: &EvalContext) -> Result<Value> {
        match self {
            Expr::Literal(lit) => Ok(literal::eval_literal(lit)),
            Expr::List(items) => literal::eval_list(items, vars, ctx),
            Expr::Map(entries) => literal::eval_map(entries, vars, ctx),

            Expr::Variable(name) => {
                vars.get(name).ok_or_else(|| EvalError::UndefinedVariable {
                    name: name.clone(),
                })
            }

            Expr::Binary { op, left, right } => {
                let left = left.eval(vars, ctx)?;
                let right = right.eval(vars, ctx)?;
                dispatch::apply_binary(ctx, *op, &left, &right)
            }

            Expr::Unary { op, expr } => match op {
                // `!` is truthiness negation, never dispatched.
                UnOp::Not => logic::eval_not(expr, vars, ctx),
                _ => {
                    let operand = expr.eval(vars, ctx)?;
                    dispatch::apply_unary(ctx, *op, &operand)
                }
            },

            Expr::And { left, right } => logic::eval_and(left, right, vars, ctx),
            Expr::Or { left, right } => logic::eval_or(left, right, vars, ctx),

            Expr::Assign { name, expr } => {
                assign::eval_assign(name, expr, vars, ctx).map(|a| a.value)
            }
            Expr::OpAssign { name, op, expr } => {
                assign::eval_op_assign(name, *op, expr, vars, ctx).map(|a| a.value)
            }
            Expr::OrAssign { name, expr } => {
                assign::eval_or_assign(name, expr, vars, ctx).map(|a| a.value)
            }
            Expr::AndAssign { name, expr } => {
                assign::eval_and_assign(name, expr, vars, ctx).map(|a| a.value)
            }

            Expr::Index { target, key } => index::eval_index(target, key, vars, ctx),
            Expr::IndexAssign { target, key, value } => {
                index::eval_index_assign(target, key, value, vars, ctx)
            }

            Expr::Interpolate(segments) => interp::eval_template(segments, vars, ctx),
            Expr::Stringify(expr) => {
                let v = expr.eval(vars, ctx)?;
                dispatch::stringify(ctx, &v).map(Value::string)
            }
        }
    }
}

/// Evaluate a single expression. Convenience wrapper over [`Evaluate`].
pub fn eval_expr(
    expr: &Expr,
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Value> {
    expr.eval(vars, ctx)
}
