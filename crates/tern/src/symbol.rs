//! Process-wide symbol interner
//!
//! Symbols are names reduced to a stable integer id, so that symbol
//! equality is a single integer comparison. The table lives for the
//! whole process: it starts empty, grows on [`intern`], and is never
//! reclaimed. Interning the same name twice always yields the same id.

use std::sync::{OnceLock, RwLock};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// A stable identifier for an interned symbol name.
///
/// Ids are allocated sequentially and remain valid for the process
/// lifetime. Two ids are equal iff they were interned from the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    /// The interned name behind this id.
    ///
    /// Ids constructed through [`intern`] always resolve; the empty
    /// string is returned only for an id this process never produced.
    pub fn name(self) -> String {
        resolve(self).unwrap_or_default()
    }
}

/// The interner state: a concurrent forward map plus an append-only
/// reverse table.
struct Interner {
    ids: DashMap<String, SymbolId>,
    names: RwLock<Vec<String>>,
}

fn global() -> &'static Interner {
    static INTERNER: OnceLock<Interner> = OnceLock::new();
    INTERNER.get_or_init(|| Interner {
        ids: DashMap::new(),
        names: RwLock::new(Vec::new()),
    })
}

/// Intern a name, returning its stable id.
///
/// Idempotent: repeated calls with the same name return the same id.
pub fn intern(name: &str) -> SymbolId {
    let interner = global();

    // Fast path: already interned.
    if let Some(id) = interner.ids.get(name) {
        return *id;
    }

    // Slow path: the entry shard lock serializes racing interns of the
    // same name, so exactly one id is allocated per distinct name.
    match interner.ids.entry(name.to_string()) {
        Entry::Occupied(entry) => *entry.get(),
        Entry::Vacant(entry) => {
            let mut names = interner
                .names
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let id = SymbolId(names.len() as u32);
            names.push(name.to_string());
            *entry.insert(id)
        }
    }
}

/// Resolve an id back to its name.
///
/// Never fails for an id obtained from [`intern`] in this process.
pub fn resolve(id: SymbolId) -> Option<String> {
    let names = global()
        .names
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    names.get(id.0 as usize).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_is_idempotent() {
        let a1 = intern("a");
        let a2 = intern("a");
        assert_eq!(a1, a2);
    }

    #[test]
    fn test_intern_is_injective() {
        assert_ne!(intern("left"), intern("right"));
    }

    #[test]
    fn test_resolve_round_trips() {
        let id = intern("round_trip_name");
        assert_eq!(resolve(id).as_deref(), Some("round_trip_name"));
        assert_eq!(id.name(), "round_trip_name");
    }

    #[test]
    fn test_concurrent_intern_allocates_one_id() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| intern("contended_name")))
            .collect();
        let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(ids[0].name(), "contended_name");
    }
}
