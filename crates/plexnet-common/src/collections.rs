//! Standard collection type aliases for Plexnet.
//!
//! Use these instead of direct HashMap/HashSet so hashing stays consistent
//! across the codebase and can be swapped in one place.
//!
//! # Type Aliases
//!
//! | Type | Use Case |
//! |------|----------|
//! | [`PlexMap`] | Hash map keyed by small keys (ids, interned names) |
//! | [`PlexSet`] | Hash set with the same hasher |
//! | [`PlexIndexMap`] | Insertion-order preserving map |

use rustc_hash::FxBuildHasher;

/// Standard HashMap with FxHash (fast, non-cryptographic).
///
/// FxHash is optimized for small keys and works well for the integer ids and
/// interned strings this store indexes by.
pub type PlexMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Standard HashSet with FxHash.
pub type PlexSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Ordered map preserving insertion order.
///
/// Used where registration order is part of the contract, e.g. attribute
/// metadata introspection.
pub type PlexIndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// Create a new empty [`PlexMap`].
#[inline]
#[must_use]
pub fn plex_map<K, V>() -> PlexMap<K, V> {
    PlexMap::with_hasher(FxBuildHasher)
}

/// Create a new empty [`PlexSet`].
#[inline]
#[must_use]
pub fn plex_set<T>() -> PlexSet<T> {
    PlexSet::with_hasher(FxBuildHasher)
}

/// Create a new empty [`PlexIndexMap`].
#[inline]
#[must_use]
pub fn plex_index_map<K, V>() -> PlexIndexMap<K, V> {
    PlexIndexMap::with_hasher(FxBuildHasher)
}
