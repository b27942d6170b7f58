//! Operator dispatch
//!
//! Two-level resolution for every dispatcher-mediated operation:
//! (1) the override registry, consulted by the receiver's tag and the
//! operator name (the only path for user objects), then (2) the
//! built-in table for the receiver's variant. No match at either level
//! is a `TypeMismatch`.

pub mod binary;
pub mod unary;

use tracing::trace;

use crate::ast::{BinOp, UnOp};
use crate::context::EvalContext;
use crate::error::{type_name, EvalError, Result};
use crate::value::Value;

/// Apply a binary operator to a receiver and one argument.
pub fn apply_binary(ctx: &EvalContext, op: BinOp, left: &Value, right: &Value) -> Result<Value> {
    let name = op.name();
    if let Some(f) = ctx.overrides.lookup(left.type_tag(), name) {
        trace!(op = name, tag = ?left.type_tag(), "operator override hit");
        return f(left, std::slice::from_ref(right));
    }
    binary::builtin(op, left, right)
}

/// Apply a unary operator (negation or splat) to a receiver.
///
/// Truthiness negation (`!`) is fixed control flow; it resolves here
/// without ever consulting the registry.
pub fn apply_unary(ctx: &EvalContext, op: UnOp, operand: &Value) -> Result<Value> {
    let builtin: fn(&Value) -> Result<Value> = match op {
        UnOp::Neg => unary::neg,
        UnOp::Splat => unary::splat,
        UnOp::Not => return Ok(Value::Bool(!operand.is_truthy())),
    };
    let name = op.name();
    if let Some(f) = ctx.overrides.lookup(operand.type_tag(), name) {
        trace!(op = name, tag = ?operand.type_tag(), "operator override hit");
        return f(operand, &[]);
    }
    builtin(operand)
}

/// Convert a value to a string through the override-aware `to_s` path.
///
/// The built-in conversion renders `Nil` as the empty string and
/// everything else in its display form (strings bare, symbols without
/// the leading colon). An override must itself return a string.
pub fn stringify(ctx: &EvalContext, v: &Value) -> Result<String> {
    if let Some(f) = ctx.overrides.lookup(v.type_tag(), "to_s") {
        let converted = f(v, &[])?;
        return match converted {
            Value::Str(s) => Ok(s.as_ref().clone()),
            other => Err(EvalError::ValueError(format!(
                "to_s returned {}, expected string",
                type_name(&other)
            ))),
        };
    }
    Ok(match v {
        Value::Nil => String::new(),
        Value::Str(s) => s.as_ref().clone(),
        Value::Symbol(id) => id.name(),
        other => other.to_string(),
    })
}
