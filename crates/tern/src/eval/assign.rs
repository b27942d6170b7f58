//! Assignment evaluation: the four assignment forms
//!
//! All four forms go through the external [`VariableStore`] interface
//! and mutate at most one binding per evaluation. The short-circuit
//! forms suppress right-hand-side evaluation entirely in their skipped
//! branch; no side effect of the skipped expression may occur.

use tracing::trace;

use crate::ast::{BinOp, Expr};
use crate::context::EvalContext;
use crate::dispatch;
use crate::environment::VariableStore;
use crate::error::{EvalError, Result};
use crate::value::Value;

use super::Evaluate;

/// The outcome of an assignment form: the resulting value and whether
/// a binding mutation occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct Assigned {
    /// The value the assignment expression evaluates to
    pub value: Value,
    /// Whether the store was written
    pub mutated: bool,
}

/// Store `value` under `name` with constant protection.
fn store(name: &str, value: Value, vars: &mut dyn VariableStore) -> Result<Assigned> {
    if vars.is_constant(name) {
        return Err(EvalError::ConstantReassignment {
            name: name.to_string(),
        });
    }
    vars.set(name, value.clone());
    trace!(name, "binding assigned");
    Ok(Assigned {
        value,
        mutated: true,
    })
}

/// Simple assignment `name = expr`.
///
/// The right-hand side is evaluated before the constant check; a
/// constant target fails with `ConstantReassignment` instead of
/// mutating.
pub fn eval_assign(
    name: &str,
    expr: &Expr,
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Assigned> {
    let value = expr.eval(vars, ctx)?;
    store(name, value, vars)
}

/// Operational assignment `name op= expr`.
///
/// Requires an existing binding; computes `op` on the current value and
/// the right-hand side, then stores by simple-assignment rules. The
/// logical forms (`||=`, `&&=`) are separate node kinds and never
/// arrive here.
pub fn eval_op_assign(
    name: &str,
    op: BinOp,
    expr: &Expr,
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Assigned> {
    let Some(current) = vars.get(name) else {
        return Err(EvalError::UndefinedVariable {
            name: name.to_string(),
        });
    };
    let rhs = expr.eval(vars, ctx)?;
    let value = dispatch::apply_binary(ctx, op, &current, &rhs)?;
    store(name, value, vars)
}

/// Or-assignment `name ||= expr`.
///
/// A bound truthy value is returned untouched and the right-hand side
/// is never evaluated. Otherwise the right-hand side is evaluated and
/// stored, creating the binding if absent; afterwards the binding
/// always exists.
pub fn eval_or_assign(
    name: &str,
    expr: &Expr,
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Assigned> {
    if let Some(current) = vars.get(name) {
        if current.is_truthy() {
            return Ok(Assigned {
                value: current,
                mutated: false,
            });
        }
    }
    let value = expr.eval(vars, ctx)?;
    store(name, value, vars)
}

/// And-assignment `name &&= expr`.
///
/// A missing binding defaults to `Nil`. A truthy current value means
/// the right-hand side is evaluated and stored; a falsy one is kept
/// (or created as `Nil`) and the right-hand side never runs. The
/// binding exists afterwards either way.
pub fn eval_and_assign(
    name: &str,
    expr: &Expr,
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Assigned> {
    let current = vars.get(name);
    let defaulted = current.clone().unwrap_or(Value::Nil);

    if defaulted.is_truthy() {
        let value = expr.eval(vars, ctx)?;
        return store(name, value, vars);
    }

    // Falsy branch: materialize the Nil default for an unbound name,
    // otherwise leave the binding alone.
    if current.is_none() {
        return store(name, Value::Nil, vars);
    }
    Ok(Assigned {
        value: defaulted,
        mutated: false,
    })
}
