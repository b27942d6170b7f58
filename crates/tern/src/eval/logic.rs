//! Truthiness and short-circuit logical evaluation
//!
//! `&&` and `||` are fixed control-flow constructs: they have no single
//! receiver, so they never go through operator dispatch and cannot be
//! overridden. Both return the deciding operand unmodified, with no
//! boolean coercion.

use crate::ast::Expr;
use crate::context::EvalContext;
use crate::environment::VariableStore;
use crate::error::Result;
use crate::value::Value;

use super::Evaluate;

/// Short-circuit `&&`: a falsy left operand is returned without
/// evaluating the right; otherwise the right operand is the result.
pub fn eval_and(
    left: &Expr,
    right: &Expr,
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Value> {
    let left = left.eval(vars, ctx)?;
    if !left.is_truthy() {
        return Ok(left);
    }
    right.eval(vars, ctx)
}

/// Short-circuit `||`: a truthy left operand is returned without
/// evaluating the right; otherwise the right operand is the result.
pub fn eval_or(
    left: &Expr,
    right: &Expr,
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Value> {
    let left = left.eval(vars, ctx)?;
    if left.is_truthy() {
        return Ok(left);
    }
    right.eval(vars, ctx)
}

/// Truthiness negation `!`: always a boolean, chains compose normally.
pub fn eval_not(
    operand: &Expr,
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Value> {
    let v = operand.eval(vars, ctx)?;
    Ok(Value::Bool(!v.is_truthy()))
}
