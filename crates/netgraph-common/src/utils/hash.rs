//! Hash map and set aliases.
//!
//! All hot-path maps in the workspace use `hashbrown` tables with the
//! `ahash` hasher instead of the SipHash default.

/// Hash map with a fast, non-cryptographic hasher.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Hash set with a fast, non-cryptographic hasher.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;
