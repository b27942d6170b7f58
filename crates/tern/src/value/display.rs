//! Display and Debug implementations for Value

use std::fmt;
use std::rc::Rc;

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut seen = Vec::new();
        fmt_value(self, f, &mut seen)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display renders strings bare; everything else matches Debug.
        match self {
            Value::Str(s) => write!(f, "{}", s.as_ref()),
            _ => {
                let mut seen = Vec::new();
                fmt_value(self, f, &mut seen)
            }
        }
    }
}

/// Formatting worker carrying a visited-pointer stack so cyclic
/// collections print a `[...]` / `{...}` marker instead of recursing.
fn fmt_value(v: &Value, f: &mut fmt::Formatter<'_>, seen: &mut Vec<usize>) -> fmt::Result {
    match v {
        Value::Nil => write!(f, "nil"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Int(n) => write!(f, "{}", n),
        Value::Float(x) => write!(f, "{:?}", x),
        Value::Str(s) => write!(f, "{:?}", s.as_ref()),
        Value::Symbol(id) => write!(f, ":{}", id.name()),

        Value::List(l) => {
            let ptr = Rc::as_ptr(l) as usize;
            if seen.contains(&ptr) {
                return write!(f, "[...]");
            }
            seen.push(ptr);
            write!(f, "[")?;
            for (i, item) in l.borrow().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                fmt_value(item, f, seen)?;
            }
            seen.pop();
            write!(f, "]")
        }

        Value::Map(m) => {
            let ptr = Rc::as_ptr(m) as usize;
            if seen.contains(&ptr) {
                return write!(f, "{{...}}");
            }
            seen.push(ptr);
            write!(f, "{{")?;
            for (i, (k, v)) in m.borrow().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                fmt_value(&k.0, f, seen)?;
                write!(f, " => ")?;
                fmt_value(v, f, seen)?;
            }
            seen.pop();
            write!(f, "}}")
        }

        Value::Object(obj) => write!(f, "#<{}>", obj.class.name()),
    }
}
