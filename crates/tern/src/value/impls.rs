//! Value trait implementations: constructors, predicates, extractors, From traits, structural equality

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::symbol::{self, SymbolId};

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Rc::new(s.into()))
    }

    /// Create a symbol value, interning the name
    pub fn symbol(name: &str) -> Self {
        Value::Symbol(symbol::intern(name))
    }

    /// Create a fresh list value
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::new(RefCell::new(items)))
    }

    /// Create a fresh map value from key/value pairs, preserving
    /// insertion order; a repeated key keeps its first position and
    /// takes the last value
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        let mut map = IndexMap::new();
        for (k, v) in entries {
            map.insert(MapKey(k), v);
        }
        Value::Map(Rc::new(RefCell::new(map)))
    }

    /// Create a user object of the given class
    pub fn object(class: SymbolId) -> Self {
        Value::Object(Rc::new(UserObject { class }))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates and Tags
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Check if value is numeric (integer or float)
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Truthiness: false only for `Nil` and `Bool(false)`.
    ///
    /// Every other value is truthy, including `Int(0)`, the empty
    /// string, the empty list and the empty map.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// The dispatch tag for this value's variant.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Nil => TypeTag::Nil,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::Str(_) => TypeTag::Str,
            Value::Symbol(_) => TypeTag::Symbol,
            Value::List(_) => TypeTag::List,
            Value::Map(_) => TypeTag::Map,
            Value::Object(obj) => TypeTag::Object(obj.class),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract as f64, promoting an integer
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract the list handle
    pub fn as_list(&self) -> Option<&ListRef> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Extract the map handle
    pub fn as_map(&self) -> Option<&MapRef> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Structural Equality
    // ═══════════════════════════════════════════════════════════════════

    /// Structural, value-based equality.
    ///
    /// Cross-type numeric comparison holds (`1.0 == 1`); `Nil` equals
    /// only `Nil`; list/map comparison is element-wise with cycle
    /// protection, so self-referential collections terminate. Maps
    /// compare by key lookup, disregarding entry order.
    pub fn eq_value(&self, other: &Value) -> bool {
        let mut seen = Vec::new();
        eq_with(self, other, &mut seen)
    }
}

/// Equality worker carrying the visited-pair stack.
///
/// A pair of collection pointers already on the stack is assumed equal;
/// this makes equality on cyclic structures terminate, and two cycles
/// with the same unrolling compare equal.
fn eq_with(a: &Value, b: &Value, seen: &mut Vec<(usize, usize)>) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,

        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Int(x), Value::Float(y)) | (Value::Float(y), Value::Int(x)) => {
            (*x as f64) == *y
        }

        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,

        (Value::List(x), Value::List(y)) => {
            if Rc::ptr_eq(x, y) {
                return true;
            }
            let pair = (Rc::as_ptr(x) as usize, Rc::as_ptr(y) as usize);
            if seen.contains(&pair) {
                return true;
            }
            seen.push(pair);
            let (x, y) = (x.borrow(), y.borrow());
            let eq = x.len() == y.len()
                && x.iter().zip(y.iter()).all(|(a, b)| eq_with(a, b, seen));
            seen.pop();
            eq
        }

        (Value::Map(x), Value::Map(y)) => {
            if Rc::ptr_eq(x, y) {
                return true;
            }
            let pair = (Rc::as_ptr(x) as usize, Rc::as_ptr(y) as usize);
            if seen.contains(&pair) {
                return true;
            }
            seen.push(pair);
            let (x, y) = (x.borrow(), y.borrow());
            let eq = x.len() == y.len()
                && x.iter().all(|(k, v)| {
                    y.get(k).is_some_and(|other| eq_with(v, other, seen))
                });
            seen.pop();
            eq
        }

        // Opaque objects compare by identity unless `==` is overridden,
        // which the dispatcher resolves before reaching here.
        (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y),

        _ => false,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.eq_value(other)
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<SymbolId> for Value {
    fn from(id: SymbolId) -> Self {
        Value::Symbol(id)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::list(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Nil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Int(0).is_truthy());
        assert!(Value::string("").is_truthy());
        assert!(Value::list(vec![]).is_truthy());
        assert!(Value::map(vec![]).is_truthy());
    }

    #[test]
    fn test_nil_equals_only_nil() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_ne!(Value::Nil, Value::Int(0));
        assert_ne!(Value::Nil, Value::string(""));
    }

    #[test]
    fn test_cross_type_numeric_equality() {
        assert_eq!(Value::Float(1.0), Value::Int(1));
        assert_eq!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Float(1.5), Value::Int(1));
    }

    #[test]
    fn test_list_structural_equality() {
        let a = Value::list(vec![Value::Int(1), Value::Int(2)]);
        let b = Value::list(vec![Value::Int(1), Value::Int(2)]);
        let c = Value::list(vec![Value::Int(2), Value::Int(1)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_map_equality_ignores_entry_order() {
        let a = Value::map(vec![
            (Value::symbol("a"), Value::Int(1)),
            (Value::symbol("b"), Value::Int(2)),
        ]);
        let b = Value::map(vec![
            (Value::symbol("b"), Value::Int(2)),
            (Value::symbol("a"), Value::Int(1)),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cyclic_list_equality_terminates() {
        let a = Value::list(vec![Value::Int(1)]);
        let b = Value::list(vec![Value::Int(1)]);
        if let (Value::List(ar), Value::List(br)) = (&a, &b) {
            ar.borrow_mut().push(Value::List(Rc::clone(ar)));
            br.borrow_mut().push(Value::List(Rc::clone(br)));
        }
        // Same unrolling, so the cycles compare equal.
        assert_eq!(a, b);
    }

    #[test]
    fn test_object_equality_is_identity() {
        let class = crate::symbol::intern("Point");
        let a = Value::object(class);
        let b = Value::object(class);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_map_repeated_literal_key_keeps_first_position() {
        let m = Value::map(vec![
            (Value::symbol("a"), Value::Int(1)),
            (Value::symbol("b"), Value::Int(2)),
            (Value::symbol("a"), Value::Int(3)),
        ]);
        let entries = m.as_map().unwrap().borrow();
        let keys: Vec<_> = entries.keys().map(|k| k.0.clone()).collect();
        assert_eq!(keys, vec![Value::symbol("a"), Value::symbol("b")]);
        assert_eq!(entries.get(&MapKey(Value::symbol("a"))), Some(&Value::Int(3)));
    }
}
