//! Index structures for id-sorted collections.
//!
//! | Index | Best for | Complexity |
//! | ----- | -------- | ---------- |
//! | [`ranked`] | Membership, point and rank lookups over sorted keys | O(log n) expected |
//!
//! [`RankedStore`] backs every id-sorted entity collection in the network
//! store; plain hash maps (see `plexnet_common::collections`) cover the
//! name and pair indexes that need no ordering.

pub mod ranked;

pub use ranked::RankedStore;
