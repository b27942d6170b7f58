//! Value representation for runtime values

mod display;
mod impls;
mod key;

pub use key::MapKey;

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::symbol::SymbolId;

/// Shared-ownership handle to a mutable list.
pub type ListRef = Rc<RefCell<Vec<Value>>>;

/// Shared-ownership handle to a mutable, insertion-ordered map.
pub type MapRef = Rc<RefCell<IndexMap<MapKey, Value>>>;

/// Runtime value representation.
///
/// Values split into two tiers:
/// - Inline primitives: no allocation, copied freely (`Nil`, `Bool`,
///   `Int`, `Float`, `Symbol`).
/// - Heap values: `Rc`-wrapped; cloning a `List` or `Map` clones the
///   handle, not the collection, so multiple bindings can observe the
///   same mutations. Rebinding a variable swaps handles and never
///   touches the collection the old handle referenced.
#[derive(Clone)]
pub enum Value {
    /// The absent value
    Nil,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 float
    Float(f64),

    /// Heap-allocated string
    Str(Rc<String>),

    /// Interned symbol; equality is id equality
    Symbol(SymbolId),

    /// Ordered, mutable, shared-ownership sequence
    List(ListRef),

    /// Ordered, mutable, shared-ownership key mapping
    Map(MapRef),

    /// Opaque user-defined object; participates in evaluation only
    /// through its operator-dispatch tag
    Object(Rc<UserObject>),
}

/// An opaque user object.
///
/// The core never inspects an object beyond its class symbol, which is
/// the tag the override registry dispatches on. Everything else about
/// user objects (fields, methods, construction) lives outside this crate.
#[derive(Debug)]
pub struct UserObject {
    /// The object's class, as an interned symbol.
    pub class: SymbolId,
}

/// Dispatch tag for a value's variant.
///
/// The override registry is keyed by `(TypeTag, operator name)`; user
/// objects carry their class symbol so each class dispatches separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `Nil`
    Nil,
    /// `Bool`
    Bool,
    /// `Int`
    Int,
    /// `Float`
    Float,
    /// `Str`
    Str,
    /// `Symbol`
    Symbol,
    /// `List`
    List,
    /// `Map`
    Map,
    /// A user object of the given class
    Object(SymbolId),
}
