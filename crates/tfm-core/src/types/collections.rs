//! Fast hash collections used across the workspace.
//!
//! FxHash has no random seed, so iteration order is stable across runs for
//! the same insertion sequence.

pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
