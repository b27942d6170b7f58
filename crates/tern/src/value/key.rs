//! Hashable wrapper for Value to enable use as map keys

use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::Value;

/// A wrapper for Value that implements `Hash` + `Eq` so any Value can
/// key a map.
///
/// Equality is structural (the same relation as `==`), so `m[1.0]`
/// finds an entry keyed by `1`. The hash is a projection consistent
/// with that relation: integers and integral floats hash identically,
/// and mutable collections hash only by variant and length. Mutating a
/// collection while it is a live key leaves the entry unfindable until
/// it is re-inserted.
#[derive(Debug, Clone)]
pub struct MapKey(pub Value);

const TAG_NIL: u8 = 0;
const TAG_BOOL: u8 = 1;
const TAG_NUM: u8 = 2;
const TAG_FLOAT: u8 = 3;
const TAG_STR: u8 = 4;
const TAG_SYMBOL: u8 = 5;
const TAG_LIST: u8 = 6;
const TAG_MAP: u8 = 7;
const TAG_OBJECT: u8 = 8;

impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Value::Nil => TAG_NIL.hash(state),
            Value::Bool(b) => {
                TAG_BOOL.hash(state);
                b.hash(state);
            }
            Value::Int(n) => {
                TAG_NUM.hash(state);
                n.hash(state);
            }
            Value::Float(f) => {
                // An integral float must collide with its integer twin,
                // since structural equality treats them as the same key.
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    TAG_NUM.hash(state);
                    (*f as i64).hash(state);
                } else {
                    TAG_FLOAT.hash(state);
                    f.to_bits().hash(state);
                }
            }
            Value::Str(s) => {
                TAG_STR.hash(state);
                s.hash(state);
            }
            Value::Symbol(id) => {
                TAG_SYMBOL.hash(state);
                id.hash(state);
            }
            Value::List(l) => {
                TAG_LIST.hash(state);
                l.borrow().len().hash(state);
            }
            Value::Map(m) => {
                TAG_MAP.hash(state);
                m.borrow().len().hash(state);
            }
            Value::Object(obj) => {
                TAG_OBJECT.hash(state);
                (Rc::as_ptr(obj) as usize).hash(state);
            }
        }
    }
}

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_value(&other.0)
    }
}

impl Eq for MapKey {}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash_of(key: &MapKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_integral_float_hashes_like_int() {
        assert_eq!(
            hash_of(&MapKey(Value::Int(1))),
            hash_of(&MapKey(Value::Float(1.0)))
        );
        assert_eq!(MapKey(Value::Int(1)), MapKey(Value::Float(1.0)));
    }

    #[test]
    fn test_distinct_variants_do_not_collide_on_equality() {
        assert_ne!(MapKey(Value::Nil), MapKey(Value::Bool(false)));
        assert_ne!(MapKey(Value::Int(0)), MapKey(Value::Bool(false)));
    }

    #[test]
    fn test_structural_list_key() {
        let a = MapKey(Value::list(vec![Value::Int(1), Value::Int(2)]));
        let b = MapKey(Value::list(vec![Value::Int(1), Value::Int(2)]));
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a, b);
    }
}
