//! Collection index read and access-assignment
//!
//! Reads are forgiving: a missing list index or map key resolves to
//! `Nil`, never an error. Writes mutate the collection in place through
//! its shared-ownership handle; access-assignment is not an assignment
//! to the variable holding the collection, only the contents change.
//!
//! Like operator dispatch, `[]` and `[]=` consult the override registry
//! before the built-ins, so user objects can be indexable.

use crate::ast::Expr;
use crate::context::{EvalContext, ListWritePolicy};
use crate::environment::VariableStore;
use crate::error::{EvalError, Result};
use crate::value::Value;

use super::Evaluate;

/// Evaluate an index read `target[key]`.
pub fn eval_index(
    target: &Expr,
    key: &Expr,
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Value> {
    let target = target.eval(vars, ctx)?;
    let key = key.eval(vars, ctx)?;

    if let Some(f) = ctx.overrides.lookup(target.type_tag(), "[]") {
        return f(&target, std::slice::from_ref(&key));
    }

    match &target {
        Value::List(list) => {
            let Value::Int(index) = key else {
                return Err(EvalError::type_mismatch2("[]", &target, &key));
            };
            let list = list.borrow();
            let slot = usize::try_from(index).ok().and_then(|i| list.get(i));
            Ok(slot.cloned().unwrap_or(Value::Nil))
        }

        Value::Map(map) => {
            let map = map.borrow();
            Ok(map
                .get(&crate::value::MapKey(key))
                .cloned()
                .unwrap_or(Value::Nil))
        }

        _ => Err(EvalError::type_mismatch("[]", &target)),
    }
}

/// Evaluate an access-assignment `target[key] = value`.
///
/// Evaluation order is target, key, value. Returns the assigned value.
pub fn eval_index_assign(
    target: &Expr,
    key: &Expr,
    value: &Expr,
    vars: &mut dyn VariableStore,
    ctx: &EvalContext,
) -> Result<Value> {
    let target = target.eval(vars, ctx)?;
    let key = key.eval(vars, ctx)?;
    let value = value.eval(vars, ctx)?;

    if let Some(f) = ctx.overrides.lookup(target.type_tag(), "[]=") {
        return f(&target, &[key, value]);
    }

    match &target {
        Value::List(list) => {
            let Value::Int(index) = key else {
                return Err(EvalError::type_mismatch2("[]=", &target, &key));
            };
            let mut list = list.borrow_mut();
            let len = list.len();
            match usize::try_from(index).ok() {
                Some(i) if i < len => {
                    list[i] = value.clone();
                    Ok(value)
                }
                Some(i) if ctx.list_write == ListWritePolicy::Extend => {
                    list.resize(i, Value::Nil);
                    list.push(value.clone());
                    Ok(value)
                }
                _ => Err(EvalError::IndexError { index, len }),
            }
        }

        Value::Map(map) => {
            map.borrow_mut()
                .insert(crate::value::MapKey(key), value.clone());
            Ok(value)
        }

        _ => Err(EvalError::type_mismatch("[]=", &target)),
    }
}
