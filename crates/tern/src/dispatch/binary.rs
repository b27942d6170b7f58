//! Built-in binary operator implementations

use indexmap::IndexMap;

use crate::ast::BinOp;
use crate::error::{EvalError, Result};
use crate::value::{MapKey, Value};

/// Apply the built-in implementation of `op` for the receiver's variant.
pub fn builtin(op: BinOp, left: &Value, right: &Value) -> Result<Value> {
    match op {
        BinOp::Add => add(left, right),
        BinOp::Sub => sub(left, right),
        BinOp::Mul => mul(left, right),
        BinOp::Div => div(left, right),
        BinOp::Rem => rem(left, right),

        // Structural equality is total over variants.
        BinOp::Eq => Ok(Value::Bool(left.eq_value(right))),
        BinOp::Ne => Ok(Value::Bool(!left.eq_value(right))),

        BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => compare(op, left, right),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Numeric Promotion
// ═══════════════════════════════════════════════════════════════════════

/// A numeric operand pair after Int→Float promotion.
enum NumPair {
    Int(i64, i64),
    Float(f64, f64),
}

fn numeric_pair(left: &Value, right: &Value) -> Option<NumPair> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(NumPair::Int(*a, *b)),
        (Value::Float(a), Value::Float(b)) => Some(NumPair::Float(*a, *b)),
        (Value::Int(a), Value::Float(b)) => Some(NumPair::Float(*a as f64, *b)),
        (Value::Float(a), Value::Int(b)) => Some(NumPair::Float(*a, *b as f64)),
        _ => None,
    }
}

fn is_zero(v: &Value) -> bool {
    matches!(v, Value::Int(0)) || matches!(v, Value::Float(f) if *f == 0.0)
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Operations
// ═══════════════════════════════════════════════════════════════════════

fn add(left: &Value, right: &Value) -> Result<Value> {
    match numeric_pair(left, right) {
        Some(NumPair::Int(a, b)) => a
            .checked_add(b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { op: "+".into() }),
        Some(NumPair::Float(a, b)) => Ok(Value::Float(a + b)),
        None => match (left, right) {
            // String concatenation
            (Value::Str(a), Value::Str(b)) => {
                Ok(Value::string(format!("{}{}", a.as_str(), b.as_str())))
            }

            // List concatenation: fresh list, left then right, duplicates kept
            (Value::List(a), Value::List(b)) => {
                let mut items: Vec<Value> = a.borrow().clone();
                items.extend(b.borrow().iter().cloned());
                Ok(Value::list(items))
            }

            // Map merge: fresh map, left entries in order, right entries
            // overwrite in place or append at the end
            (Value::Map(a), Value::Map(b)) => {
                let mut merged: IndexMap<MapKey, Value> = a.borrow().clone();
                for (k, v) in b.borrow().iter() {
                    merged.insert(k.clone(), v.clone());
                }
                Ok(Value::Map(std::rc::Rc::new(std::cell::RefCell::new(merged))))
            }

            _ => Err(EvalError::type_mismatch2("+", left, right)),
        },
    }
}

fn sub(left: &Value, right: &Value) -> Result<Value> {
    match numeric_pair(left, right) {
        Some(NumPair::Int(a, b)) => a
            .checked_sub(b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { op: "-".into() }),
        Some(NumPair::Float(a, b)) => Ok(Value::Float(a - b)),
        None => Err(EvalError::type_mismatch2("-", left, right)),
    }
}

fn mul(left: &Value, right: &Value) -> Result<Value> {
    match numeric_pair(left, right) {
        Some(NumPair::Int(a, b)) => a
            .checked_mul(b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { op: "*".into() }),
        Some(NumPair::Float(a, b)) => Ok(Value::Float(a * b)),
        None => match (left, right) {
            // String repetition
            (Value::Str(s), Value::Int(n)) => {
                let count = usize::try_from(*n).map_err(|_| {
                    EvalError::ValueError(format!("negative repeat count {}", n))
                })?;
                Ok(Value::string(s.repeat(count)))
            }
            _ => Err(EvalError::type_mismatch2("*", left, right)),
        },
    }
}

fn div(left: &Value, right: &Value) -> Result<Value> {
    match numeric_pair(left, right) {
        // Zero divisors fail for floats too; the divergence from IEEE
        // Inf/NaN is deliberate.
        Some(_) if is_zero(right) => Err(EvalError::DivisionByZero),
        Some(NumPair::Int(a, b)) => a
            .checked_div(b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { op: "/".into() }),
        Some(NumPair::Float(a, b)) => Ok(Value::Float(a / b)),
        None => Err(EvalError::type_mismatch2("/", left, right)),
    }
}

fn rem(left: &Value, right: &Value) -> Result<Value> {
    match numeric_pair(left, right) {
        Some(_) if is_zero(right) => Err(EvalError::DivisionByZero),
        Some(NumPair::Int(a, b)) => a
            .checked_rem(b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { op: "%".into() }),
        Some(NumPair::Float(a, b)) => Ok(Value::Float(a % b)),
        None => Err(EvalError::type_mismatch2("%", left, right)),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Ordering
// ═══════════════════════════════════════════════════════════════════════

fn compare(op: BinOp, left: &Value, right: &Value) -> Result<Value> {
    if let Some(pair) = numeric_pair(left, right) {
        let holds = match pair {
            NumPair::Int(a, b) => match op {
                BinOp::Lt => a < b,
                BinOp::Le => a <= b,
                BinOp::Gt => a > b,
                BinOp::Ge => a >= b,
                _ => unreachable!(),
            },
            NumPair::Float(a, b) => match op {
                BinOp::Lt => a < b,
                BinOp::Le => a <= b,
                BinOp::Gt => a > b,
                BinOp::Ge => a >= b,
                _ => unreachable!(),
            },
        };
        return Ok(Value::Bool(holds));
    }

    match (left, right) {
        // Lexicographic string ordering
        (Value::Str(a), Value::Str(b)) => {
            let holds = match op {
                BinOp::Lt => a < b,
                BinOp::Le => a <= b,
                BinOp::Gt => a > b,
                BinOp::Ge => a >= b,
                _ => unreachable!(),
            };
            Ok(Value::Bool(holds))
        }

        // Subset tests, order-insensitive; `>` and `>=` are the flipped
        // forms of `<` and `<=`
        (Value::List(_), Value::List(_)) | (Value::Map(_), Value::Map(_)) => {
            let holds = match op {
                BinOp::Lt => strict_subset(left, right),
                BinOp::Le => subset(left, right),
                BinOp::Gt => strict_subset(right, left),
                BinOp::Ge => subset(right, left),
                _ => unreachable!(),
            };
            Ok(Value::Bool(holds))
        }

        _ => Err(EvalError::type_mismatch2(op.name(), left, right)),
    }
}

/// Subset-or-equal, disregarding element order.
///
/// Lists use multiset cardinality: every element of `a` must occur in
/// `b` at least as many times, counting occurrences by structural
/// equality. Maps require each left entry to be present in `b` with an
/// equal value.
fn subset(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::List(a), Value::List(b)) => {
            let (a, b) = (a.borrow(), b.borrow());
            a.iter().all(|x| {
                let in_a = a.iter().filter(|y| y.eq_value(x)).count();
                let in_b = b.iter().filter(|y| y.eq_value(x)).count();
                in_a <= in_b
            })
        }
        (Value::Map(a), Value::Map(b)) => {
            let (a, b) = (a.borrow(), b.borrow());
            a.iter()
                .all(|(k, v)| b.get(k).is_some_and(|other| other.eq_value(v)))
        }
        _ => false,
    }
}

/// Strict subset: subset-or-equal plus extra elements on the right.
fn strict_subset(a: &Value, b: &Value) -> bool {
    let extra = match (a, b) {
        (Value::List(a), Value::List(b)) => a.borrow().len() < b.borrow().len(),
        (Value::Map(a), Value::Map(b)) => a.borrow().len() < b.borrow().len(),
        _ => false,
    };
    extra && subset(a, b)
}
