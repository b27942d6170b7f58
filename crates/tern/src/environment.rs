//! Variable binding store
//!
//! Evaluation reaches the scope machinery only through the narrow
//! [`VariableStore`] interface; scope entry/exit and binding
//! destruction are the caller's business. A frame-based
//! [`Environment`] is bundled for hosts (and tests) that do not bring
//! their own store.

use crate::value::Value;

/// The variable-store interface the assignment evaluator consumes.
///
/// Constants are names whose first assignment has already occurred and
/// which must not be reassigned; what makes a name constant is the
/// store's policy, the evaluator only consults [`is_constant`].
///
/// [`is_constant`]: VariableStore::is_constant
pub trait VariableStore {
    /// Look up a binding. Values are handles, so this clone is cheap.
    fn get(&self, name: &str) -> Option<Value>;

    /// Bind or rebind a name in the innermost scope that holds it,
    /// creating it in the current scope when absent.
    fn set(&mut self, name: &str, value: Value);

    /// Check if a binding exists.
    fn exists(&self, name: &str) -> bool;

    /// Check if a bound name is constant.
    fn is_constant(&self, name: &str) -> bool;
}

/// A single variable binding.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The binding's name
    pub name: String,

    /// The bound value
    pub value: Value,
}

/// Flat-frame binding store.
///
/// All bindings live in one array with frame boundaries marking scope
/// starts; lookup scans backwards so inner bindings shadow outer ones.
///
/// Constant policy: a bound name whose first character is uppercase is
/// a constant.
///
/// # Example
///
/// ```
/// use tern::{Environment, Value, VariableStore};
///
/// let mut env = Environment::new();
/// env.set("x", Value::Int(1));
///
/// env.push_frame();
/// env.set("y", Value::Int(2));
/// assert_eq!(env.get("x"), Some(Value::Int(1)));
///
/// env.pop_frame();
/// assert_eq!(env.get("y"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    /// All bindings in a flat array (most recent at end)
    bindings: Vec<Binding>,

    /// Frame boundaries (indices into bindings); each entry marks where
    /// a scope begins
    frames: Vec<usize>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create a new empty environment with a single global frame.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            frames: vec![0],
        }
    }

    /// Enter a new scope. Bindings created after this call disappear
    /// when the matching `pop_frame` runs.
    pub fn push_frame(&mut self) {
        self.frames.push(self.bindings.len());
    }

    /// Exit the current scope. The global frame is never popped.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            if let Some(boundary) = self.frames.pop() {
                self.bindings.truncate(boundary);
            }
        }
    }

    /// Get the current scope depth (number of frames).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over all bindings (for debugging/REPL hosts).
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        // Reverse search so shadowing finds the innermost binding.
        self.bindings
            .iter()
            .enumerate()
            .rev()
            .find(|(_, b)| b.name == name)
            .map(|(i, _)| i)
    }
}

impl VariableStore for Environment {
    fn get(&self, name: &str) -> Option<Value> {
        self.position(name).map(|i| self.bindings[i].value.clone())
    }

    fn set(&mut self, name: &str, value: Value) {
        match self.position(name) {
            Some(i) => self.bindings[i].value = value,
            None => self.bindings.push(Binding {
                name: name.to_string(),
                value,
            }),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn is_constant(&self, name: &str) -> bool {
        self.exists(name) && name.chars().next().is_some_and(|c| c.is_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut env = Environment::new();
        assert!(!env.exists("x"));

        env.set("x", Value::Int(42));
        assert!(env.exists("x"));
        assert_eq!(env.get("x"), Some(Value::Int(42)));

        env.set("x", Value::Int(7));
        assert_eq!(env.get("x"), Some(Value::Int(7)));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_frames_shadow_and_unwind() {
        let mut env = Environment::new();
        env.set("x", Value::Int(1));

        env.push_frame();
        env.bindings.push(Binding {
            name: "x".to_string(),
            value: Value::Int(10),
        });
        assert_eq!(env.get("x"), Some(Value::Int(10)));

        env.pop_frame();
        assert_eq!(env.get("x"), Some(Value::Int(1)));
        assert_eq!(env.depth(), 1);
    }

    #[test]
    fn test_global_frame_is_never_popped() {
        let mut env = Environment::new();
        env.set("x", Value::Int(1));
        env.pop_frame();
        assert_eq!(env.get("x"), Some(Value::Int(1)));
    }

    #[test]
    fn test_constant_convention() {
        let mut env = Environment::new();
        assert!(!env.is_constant("Max"));

        env.set("Max", Value::Int(10));
        env.set("limit", Value::Int(10));
        assert!(env.is_constant("Max"));
        assert!(!env.is_constant("limit"));
    }

    #[test]
    fn test_shared_collection_visible_through_two_bindings() {
        let mut env = Environment::new();
        let list = Value::list(vec![Value::Int(1)]);
        env.set("a", list.clone());
        env.set("b", list);

        if let Some(Value::List(l)) = env.get("a") {
            l.borrow_mut().push(Value::Int(2));
        }
        assert_eq!(
            env.get("b"),
            Some(Value::list(vec![Value::Int(1), Value::Int(2)]))
        );
    }
}
