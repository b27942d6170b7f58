//! Literal and collection-literal evaluation

use crate::ast::{Expr, Literal};
use crate::context::EvalContext;
use crate::environment::VariableStore;
use crate::error::Result;
use crate::value::Value;

use super::Evaluate;

/// Evaluate a literal node. Nil and the booleans are singleton
/// constants; nothing here allocates except strings.
pub fn eval_literal(lit: &Literal) -> Value {
    match lit {
        Literal::Nil => Value::Nil,
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Int(n) => Value::Int(*n),
        Literal::Float(f) => Value::Float(*f),
        Literal::Str(s) => Value::string(s.as_str()),
        Literal::Symbol(name) => Value::symbol(name),
    }
}

/// Evaluate a list literal to a fresh list, elements left to right.
pub fn eval_list(
    items: &[Expr],
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Value> {
    let mut values = Vec::with_capacity(items.len());
    for item in items {
        values.push(item.eval(vars, ctx)?);
    }
    Ok(Value::list(values))
}

/// Evaluate a map literal to a fresh map, each key before its value,
/// entries left to right.
pub fn eval_map(
    entries: &[(Expr, Expr)],
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Value> {
    let mut pairs = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let key = key.eval(vars, ctx)?;
        let value = value.eval(vars, ctx)?;
        pairs.push((key, value));
    }
    Ok(Value::map(pairs))
}
