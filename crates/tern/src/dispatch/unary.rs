//! Built-in unary operator implementations

use crate::error::{EvalError, Result};
use crate::value::Value;

/// Numeric negation: `0 - operand`.
pub fn neg(operand: &Value) -> Result<Value> {
    match operand {
        Value::Int(n) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { op: "-@".into() }),
        Value::Float(f) => Ok(Value::Float(-f)),
        other => Err(EvalError::type_mismatch("-", other)),
    }
}

/// Splat.
///
/// On a map, a fresh list of `[key, value]` pair-lists in iteration
/// order. On a list, the same shared handle, not a copy.
pub fn splat(operand: &Value) -> Result<Value> {
    match operand {
        Value::List(_) => Ok(operand.clone()),
        Value::Map(m) => {
            let pairs = m
                .borrow()
                .iter()
                .map(|(k, v)| Value::list(vec![k.0.clone(), v.clone()]))
                .collect();
            Ok(Value::list(pairs))
        }
        other => Err(EvalError::type_mismatch("*", other)),
    }
}
