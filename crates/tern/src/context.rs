//! Evaluation context configuration

use crate::registry::OverrideRegistry;

/// Policy for list writes past the current end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListWritePolicy {
    /// Fail with `IndexError` (the default; reads already degrade to
    /// `Nil`, the write side is where a bad index stays observable)
    #[default]
    Strict,
    /// Grow the list, padding the gap with `Nil`
    Extend,
}

/// Configuration passed through all evaluation calls.
///
/// Carries the operator override registry and evaluation policies.
/// `Default` gives an empty registry and strict list writes.
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    /// Operator/method overrides consulted before built-ins
    pub overrides: OverrideRegistry,

    /// What a list write past the end does
    pub list_write: ListWritePolicy,
}

impl EvalContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context around an existing override registry.
    pub fn with_overrides(overrides: OverrideRegistry) -> Self {
        Self {
            overrides,
            ..Default::default()
        }
    }
}
