//! Error types for evaluation

use thiserror::Error;

use crate::value::Value;

/// Main error type for evaluation.
///
/// Every failure the core produces is one of these kinds. The external
/// rescue engine receives errors as raised values via
/// [`EvalError::to_value`]; conditions the language treats as
/// recoverable (missing list index on read, missing map key) never
/// reach this type and resolve to `Nil` instead.
#[derive(Error, Debug)]
pub enum EvalError {
    /// No override and no built-in matches the operator/receiver pair
    #[error("type mismatch: `{op}` is not defined for {operands}")]
    TypeMismatch {
        /// Operator or method name
        op: String,
        /// Human-readable description of the operand types
        operands: String,
    },

    /// Zero-valued divisor for `/` or `%`
    #[error("division by zero")]
    DivisionByZero,

    /// Checked integer arithmetic overflowed
    #[error("integer overflow in `{op}`")]
    IntegerOverflow {
        /// Operator that overflowed
        op: String,
    },

    /// Operational assignment on a name with no binding
    #[error("undefined variable `{name}`")]
    UndefinedVariable {
        /// The missing name
        name: String,
    },

    /// Assignment to a name whose first assignment already occurred
    /// and which the store reports as constant
    #[error("cannot reassign constant `{name}`")]
    ConstantReassignment {
        /// The constant's name
        name: String,
    },

    /// List write outside the valid index range
    #[error("index {index} out of range for list of length {len}")]
    IndexError {
        /// Requested index
        index: i64,
        /// Length of the list at the time of the write
        len: usize,
    },

    /// Well-typed operands with an unacceptable value
    #[error("value error: {0}")]
    ValueError(String),

    /// A value raised by override code
    #[error("raised: {0}")]
    Raised(Value),
}

impl EvalError {
    /// Build a `TypeMismatch` for a unary or method-style operation.
    pub fn type_mismatch(op: &str, receiver: &Value) -> Self {
        EvalError::TypeMismatch {
            op: op.to_string(),
            operands: type_name(receiver).to_string(),
        }
    }

    /// Build a `TypeMismatch` for a binary operation.
    pub fn type_mismatch2(op: &str, left: &Value, right: &Value) -> Self {
        EvalError::TypeMismatch {
            op: op.to_string(),
            operands: format!("{} and {}", type_name(left), type_name(right)),
        }
    }

    /// Render this error as the value the raise/unwind mechanism
    /// carries to the external rescue engine.
    ///
    /// Errors raised by override code pass their value through
    /// unchanged; every built-in kind becomes a map with `:error` and
    /// `:message` entries, so rescue patterns can dispatch on the kind
    /// symbol.
    pub fn to_value(&self) -> Value {
        if let EvalError::Raised(v) = self {
            return v.clone();
        }
        let kind = match self {
            EvalError::TypeMismatch { .. } => "type_mismatch",
            EvalError::DivisionByZero => "division_by_zero",
            EvalError::IntegerOverflow { .. } => "integer_overflow",
            EvalError::UndefinedVariable { .. } => "undefined_variable",
            EvalError::ConstantReassignment { .. } => "constant_reassignment",
            EvalError::IndexError { .. } => "index_error",
            EvalError::ValueError(_) => "value_error",
            EvalError::Raised(_) => unreachable!(),
        };
        Value::map(vec![
            (Value::symbol("error"), Value::symbol(kind)),
            (Value::symbol("message"), Value::string(self.to_string())),
        ])
    }
}

/// Result type alias for evaluation.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Human-readable name of a value's type, for error messages.
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Nil => "nil",
        Value::Bool(_) => "boolean",
        Value::Int(_) => "integer",
        Value::Float(_) => "float",
        Value::Str(_) => "string",
        Value::Symbol(_) => "symbol",
        Value::List(_) => "list",
        Value::Map(_) => "map",
        Value::Object(_) => "object",
    }
}
