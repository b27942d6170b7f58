//! Override registry: the first level of operator dispatch
//!
//! Every dispatcher-mediated operator is an overridable method. Before
//! a built-in runs, the registry is consulted by `(TypeTag, name)`;
//! a hit replaces the built-in entirely. User objects have no built-ins,
//! so the registry is their only dispatch path.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;
use crate::value::{TypeTag, Value};

/// An operator or method override.
///
/// Receives the receiver and the operator's arguments (empty for unary
/// operators and `to_s`, one element for binary operators, two for
/// `[]=`). Returns a result value or raises.
pub type OverrideFn = Rc<dyn Fn(&Value, &[Value]) -> Result<Value>>;

/// Registry of operator/method overrides, keyed by receiver tag and name.
///
/// Registration is last-write-wins per key. The two fixed control-flow
/// constructs (`&&`, `||`) and truthiness negation (`!`) are never
/// looked up here.
#[derive(Clone, Default)]
pub struct OverrideRegistry {
    entries: HashMap<TypeTag, HashMap<String, OverrideFn>>,
}

impl OverrideRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override for `(tag, name)`.
    pub fn register<F>(&mut self, tag: TypeTag, name: &str, f: F)
    where
        F: Fn(&Value, &[Value]) -> Result<Value> + 'static,
    {
        self.entries
            .entry(tag)
            .or_default()
            .insert(name.to_string(), Rc::new(f));
    }

    /// Look up the override for `(tag, name)`, if any.
    pub fn lookup(&self, tag: TypeTag, name: &str) -> Option<&OverrideFn> {
        self.entries.get(&tag)?.get(name)
    }

    /// Number of registered overrides.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Check if no overrides are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for OverrideRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideRegistry")
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = OverrideRegistry::new();
        assert!(registry.is_empty());

        registry.register(TypeTag::Int, "+", |recv, _args| Ok(recv.clone()));
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup(TypeTag::Int, "+").is_some());
        assert!(registry.lookup(TypeTag::Int, "-").is_none());
        assert!(registry.lookup(TypeTag::Float, "+").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = OverrideRegistry::new();
        registry.register(TypeTag::Str, "+", |_, _| Ok(Value::Int(1)));
        registry.register(TypeTag::Str, "+", |_, _| Ok(Value::Int(2)));

        let f = registry.lookup(TypeTag::Str, "+").unwrap();
        assert_eq!(f(&Value::Nil, &[]).unwrap(), Value::Int(2));
    }
}
