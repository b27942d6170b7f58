//! # Tern
//!
//! Evaluation core for a dynamically-typed expression language.
//!
//! Tern implements the value model and operator semantics of the
//! language: a tagged [`Value`] representation with shared-ownership
//! collections, a process-wide symbol interner, override-aware operator
//! dispatch, truthiness and short-circuit logic, the four assignment
//! forms, collection indexing, and interpolation-template expansion.
//!
//! The surrounding pieces are external collaborators: a parser delivers
//! [`ast::Expr`] nodes, the scope machinery sits behind
//! [`VariableStore`], and raised errors ([`EvalError::to_value`]) are
//! caught and pattern-dispatched by a rescue engine outside this crate.
//!
//! ## Example
//!
//! ```
//! use tern::ast::{BinOp, Expr};
//! use tern::{Environment, EvalContext, Evaluate, Value};
//!
//! let mut env = Environment::new();
//! let ctx = EvalContext::new();
//!
//! let expr = Expr::binary(BinOp::Add, Expr::int(2), Expr::int(3));
//! assert_eq!(expr.eval(&mut env, &ctx).unwrap(), Value::Int(5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod dispatch;
pub mod environment;
pub mod error;
pub mod eval;
pub mod registry;
pub mod symbol;
pub mod value;

// Re-export main types
pub use context::{EvalContext, ListWritePolicy};
pub use environment::{Binding, Environment, VariableStore};
pub use error::{type_name, EvalError, Result};
pub use eval::assign::Assigned;
pub use eval::{eval_expr, Evaluate};
pub use registry::{OverrideFn, OverrideRegistry};
pub use symbol::{intern, resolve, SymbolId};
pub use value::{ListRef, MapKey, MapRef, TypeTag, UserObject, Value};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
