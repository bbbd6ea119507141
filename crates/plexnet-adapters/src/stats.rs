//! Elementary statistics and set helpers for analysis code.

use std::hash::Hash;

use plexnet_common::collections::{plex_set, PlexSet};

/// Arithmetic mean. Returns `f64::NAN` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Returns `f64::NAN` for an empty slice.
#[must_use]
pub fn stdev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Elements present in both sets.
#[must_use]
pub fn intersect<T: Hash + Eq + Clone>(a: &PlexSet<T>, b: &PlexSet<T>) -> PlexSet<T> {
    a.intersection(b).cloned().collect()
}

/// Elements present in either set.
#[must_use]
pub fn union_of<T: Hash + Eq + Clone>(a: &PlexSet<T>, b: &PlexSet<T>) -> PlexSet<T> {
    a.union(b).cloned().collect()
}

/// Builds a [`PlexSet`] from an iterator, for call sites assembling ad-hoc
/// sets of ids.
pub fn collect_set<T: Hash + Eq>(items: impl IntoIterator<Item = T>) -> PlexSet<T> {
    let mut set = plex_set();
    set.extend(items);
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_stdev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert_eq!(stdev(&values), 2.0);
    }

    #[test]
    fn test_empty_slices() {
        assert!(mean(&[]).is_nan());
        assert!(stdev(&[]).is_nan());
    }

    #[test]
    fn test_single_value() {
        assert_eq!(mean(&[3.5]), 3.5);
        assert_eq!(stdev(&[3.5]), 0.0);
    }

    #[test]
    fn test_set_operations() {
        let a = collect_set([1u64, 2, 3]);
        let b = collect_set([2u64, 3, 4]);

        let both = intersect(&a, &b);
        assert_eq!(both.len(), 2);
        assert!(both.contains(&2) && both.contains(&3));

        let either = union_of(&a, &b);
        assert_eq!(either.len(), 4);
    }
}
