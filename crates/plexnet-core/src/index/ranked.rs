//! Ordered index with rank (order-statistic) lookups.
//!
//! [`RankedStore`] keeps (u64 key, value) pairs sorted by key and answers
//! membership, point lookups and "give me the k-th smallest" in expected
//! O(log n). It is a skip list whose links carry span counts: the span of a
//! level-i link is the number of base-level entries it skips, plus one, so a
//! rank lookup rides the same descent as a key search at no extra cost.
//!
//! Nodes live in an arena of slots addressed by stable `u32` handles; the
//! forward and span towers store handles instead of pointers, so there is no
//! shared ownership anywhere in the structure. Erased slots go onto a free
//! list and are reused.
//!
//! # Example
//!
//! ```
//! use plexnet_core::RankedStore;
//!
//! let mut store: RankedStore<&str> = RankedStore::new();
//! store.insert(30, "c");
//! store.insert(10, "a");
//! store.insert(20, "b");
//!
//! assert_eq!(store.get(20), Some(&"b"));
//! assert_eq!(store.get_at_rank(0), Some(&"a"));
//! assert_eq!(store.get_at_rank(2), Some(&"c"));
//! assert_eq!(store.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use smallvec::{smallvec, SmallVec};

/// Highest level a tower may reach (towers span levels `0..=MAX_LEVEL`).
///
/// Caps the worst-case search height while the geometric level draw keeps the
/// expected cost logarithmic.
const MAX_LEVEL: usize = 16;

/// Continuation probability of the geometric level draw.
const P: f64 = 0.5;

/// Handle of a slot in the arena. `NIL` terminates every level.
type Handle = u32;

const NIL: Handle = u32::MAX;

/// One arena slot: a key, its value, and the forward/span towers.
///
/// The head sentinel occupies slot 0 with no value and a full-height tower.
/// Free-listed slots keep their towers allocated for reuse.
struct Slot<T> {
    key: u64,
    value: Option<T>,
    /// forward[i] = next slot at level i, or NIL.
    forward: SmallVec<[Handle; 4]>,
    /// span[i] = base entries strictly between this slot and forward[i],
    /// plus one. Meaningful only while forward[i] is on the search path.
    span: SmallVec<[usize; 4]>,
}

impl<T> Slot<T> {
    fn with_height(height: usize, key: u64, value: Option<T>) -> Self {
        Self {
            key,
            value,
            forward: smallvec![NIL; height + 1],
            span: smallvec![0; height + 1],
        }
    }
}

/// A probabilistic ordered index keyed by u64 with rank lookups.
///
/// Forward iteration yields values in strictly increasing key order. All
/// operations are single-threaded; the borrow checker rules out mutation
/// while an iterator is live.
pub struct RankedStore<T> {
    slots: Vec<Slot<T>>,
    free: Vec<Handle>,
    /// Highest level currently in use (index into the head's towers).
    level: usize,
    len: usize,
    rng: SmallRng,
}

impl<T> RankedStore<T> {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty store with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(Slot::with_height(MAX_LEVEL, 0, None));
        Self {
            slots,
            free: Vec::new(),
            level: 0,
            len: 0,
            // Level draws only affect performance, not results; a fixed seed
            // keeps runs reproducible.
            rng: SmallRng::seed_from_u64(0x9e37_79b9),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `key` is present. Expected O(log n).
    #[must_use]
    pub fn contains(&self, key: u64) -> bool {
        self.find(key).is_some()
    }

    /// Returns the value stored under `key`, if any. Expected O(log n).
    #[must_use]
    pub fn get(&self, key: u64) -> Option<&T> {
        let h = self.find(key)?;
        self.slots[h as usize].value.as_ref()
    }

    /// Returns the value whose key is the `rank`-th smallest (0-based).
    ///
    /// Returns `None` when `rank` is outside `[0, len)`.
    #[must_use]
    pub fn get_at_rank(&self, rank: usize) -> Option<&T> {
        if rank >= self.len {
            return None;
        }
        let mut x = 0usize;
        let mut so_far = 0usize;
        for i in (0..=self.level).rev() {
            while self.slots[x].forward[i] != NIL && so_far + self.slots[x].span[i] <= rank + 1 {
                so_far += self.slots[x].span[i];
                x = self.slots[x].forward[i] as usize;
            }
        }
        self.slots[x].value.as_ref()
    }

    /// Inserts `value` under `key`.
    ///
    /// If the key is absent the entry is spliced into every level of its
    /// drawn height and predecessor spans are rebuilt; if the key is present
    /// the value is replaced in place and the previous one returned - size,
    /// ordering and span bookkeeping are untouched.
    pub fn insert(&mut self, key: u64, value: T) -> Option<T> {
        let mut update: [Handle; MAX_LEVEL + 1] = [0; MAX_LEVEL + 1];
        let mut skipped_at = [0usize; MAX_LEVEL + 1];
        let mut skipped = 0usize;

        let mut x = 0usize;
        for i in (0..=self.level).rev() {
            skipped_at[i] = skipped;
            loop {
                let next = self.slots[x].forward[i];
                if next == NIL || self.slots[next as usize].key >= key {
                    break;
                }
                skipped_at[i] += self.slots[x].span[i];
                skipped += self.slots[x].span[i];
                x = next as usize;
            }
            update[i] = x as Handle;
        }

        let found = self.slots[x].forward[0];
        if found != NIL && self.slots[found as usize].key == key {
            return self.slots[found as usize].value.replace(value);
        }

        self.len += 1;
        let height = self.random_level();
        if height > self.level {
            for i in (self.level + 1)..=height {
                update[i] = 0;
                skipped_at[i] = 0;
                self.slots[0].span[i] = self.len;
            }
            self.level = height;
        }

        let new = self.alloc(height, key, value);
        for i in 0..=height {
            let pred = update[i] as usize;
            let offset = skipped - skipped_at[i];

            let succ = self.slots[pred].forward[i];
            self.slots[new as usize].forward[i] = succ;
            self.slots[new as usize].span[i] = if succ == NIL {
                self.len - skipped
            } else {
                self.slots[pred].span[i] - offset
            };

            self.slots[pred].forward[i] = new;
            self.slots[pred].span[i] = offset + 1;
        }
        // Levels above the new tower now skip one more base entry.
        for i in (height + 1)..=self.level {
            let pred = update[i] as usize;
            self.slots[pred].span[i] += 1;
        }
        None
    }

    /// Removes the entry under `key` and returns its value; `None` if absent.
    ///
    /// The entry is spliced out of every level it participates in, spans of
    /// predecessors that skipped it are decremented, and the active level
    /// count shrinks when topmost levels drain.
    pub fn remove(&mut self, key: u64) -> Option<T> {
        let mut update: [Handle; MAX_LEVEL + 1] = [0; MAX_LEVEL + 1];
        let mut x = 0usize;
        for i in (0..=self.level).rev() {
            loop {
                let next = self.slots[x].forward[i];
                if next == NIL || self.slots[next as usize].key >= key {
                    break;
                }
                x = next as usize;
            }
            update[i] = x as Handle;
        }

        let target = self.slots[x].forward[0];
        if target == NIL || self.slots[target as usize].key != key {
            return None;
        }

        for i in 0..=self.level {
            let pred = update[i] as usize;
            if self.slots[pred].forward[i] == target {
                let carried = self.slots[target as usize].span[i];
                self.slots[pred].forward[i] = self.slots[target as usize].forward[i];
                self.slots[pred].span[i] += carried - 1;
            } else {
                self.slots[pred].span[i] -= 1;
            }
        }

        self.len -= 1;
        while self.level > 0 && self.slots[0].forward[self.level] == NIL {
            self.level -= 1;
        }

        let value = self.slots[target as usize].value.take();
        self.free.push(target);
        value
    }

    /// Iterates over values in strictly increasing key order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            store: self,
            current: self.slots[0].forward[0],
        }
    }

    /// Iterates over (key, value) pairs in strictly increasing key order.
    pub fn entries(&self) -> impl Iterator<Item = (u64, &T)> {
        Entries {
            store: self,
            current: self.slots[0].forward[0],
        }
    }

    /// Locates the slot holding `key`, if present.
    fn find(&self, key: u64) -> Option<Handle> {
        let mut x = 0usize;
        for i in (0..=self.level).rev() {
            loop {
                let next = self.slots[x].forward[i];
                if next == NIL || self.slots[next as usize].key >= key {
                    break;
                }
                x = next as usize;
            }
        }
        let candidate = self.slots[x].forward[0];
        if candidate != NIL && self.slots[candidate as usize].key == key {
            Some(candidate)
        } else {
            None
        }
    }

    /// Draws a tower height: geometric with continuation probability `P`,
    /// capped at `MAX_LEVEL`.
    fn random_level(&mut self) -> usize {
        let mut level = 0;
        while level < MAX_LEVEL && self.rng.gen_bool(P) {
            level += 1;
        }
        level
    }

    /// Takes a slot from the free list or grows the arena.
    fn alloc(&mut self, height: usize, key: u64, value: T) -> Handle {
        if let Some(h) = self.free.pop() {
            let slot = &mut self.slots[h as usize];
            slot.key = key;
            slot.value = Some(value);
            slot.forward.clear();
            slot.forward.resize(height + 1, NIL);
            slot.span.clear();
            slot.span.resize(height + 1, 0);
            h
        } else {
            self.slots.push(Slot::with_height(height, key, Some(value)));
            (self.slots.len() - 1) as Handle
        }
    }
}

impl<T> Default for RankedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RankedStore<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward value iterator over a [`RankedStore`], in increasing key order.
///
/// One-pass and non-restartable; obtain a fresh one from
/// [`RankedStore::iter`] to traverse again.
pub struct Iter<'a, T> {
    store: &'a RankedStore<T>,
    current: Handle,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.current == NIL {
            return None;
        }
        let slot = &self.store.slots[self.current as usize];
        self.current = slot.forward[0];
        slot.value.as_ref()
    }
}

struct Entries<'a, T> {
    store: &'a RankedStore<T>,
    current: Handle,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (u64, &'a T);

    fn next(&mut self) -> Option<(u64, &'a T)> {
        if self.current == NIL {
            return None;
        }
        let slot = &self.store.slots[self.current as usize];
        self.current = slot.forward[0];
        slot.value.as_ref().map(|v| (slot.key, v))
    }
}
