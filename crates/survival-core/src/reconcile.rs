// File: crates/survival-core/src/reconcile.rs
// Summary: Keyed three-way diff between drawn elements and desired elements.

use std::collections::HashSet;
use std::hash::Hash;

/// Actions turning the `current` key set into the `desired` one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciliation<K> {
    /// Desired keys with no current element, in desired order.
    pub create: Vec<K>,
    /// Keys present on both sides, in desired order.
    pub update: Vec<K>,
    /// Current keys no longer desired, in current order.
    pub remove: Vec<K>,
}

impl<K> Reconciliation<K> {
    pub fn is_noop(&self) -> bool {
        self.create.is_empty() && self.remove.is_empty()
    }
}

/// Match `current` against `desired` by key equality.
/// Duplicate desired keys are reported once, at their first position.
pub fn reconcile<K>(current: &[K], desired: &[K]) -> Reconciliation<K>
where
    K: Eq + Hash + Clone,
{
    let have: HashSet<&K> = current.iter().collect();
    let mut seen: HashSet<&K> = HashSet::with_capacity(desired.len());
    let mut create = Vec::new();
    let mut update = Vec::new();
    for k in desired {
        if !seen.insert(k) {
            continue;
        }
        if have.contains(k) {
            update.push(k.clone());
        } else {
            create.push(k.clone());
        }
    }
    let remove = current.iter().filter(|k| !seen.contains(k)).cloned().collect();
    Reconciliation { create, update, remove }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_create_update_remove() {
        let r = reconcile(&["M", "F"], &["F", "X", "Y"]);
        assert_eq!(r.create, vec!["X", "Y"]);
        assert_eq!(r.update, vec!["F"]);
        assert_eq!(r.remove, vec!["M"]);
        assert!(!r.is_noop());
    }

    #[test]
    fn same_keys_is_pure_update() {
        let r = reconcile(&[1, 2, 3], &[3, 2, 1]);
        assert!(r.create.is_empty() && r.remove.is_empty());
        assert_eq!(r.update, vec![3, 2, 1]);
        assert!(r.is_noop());
    }

    #[test]
    fn empty_sides() {
        let r = reconcile::<u8>(&[], &[]);
        assert!(r.is_noop() && r.update.is_empty());
        let r = reconcile(&["a"], &[]);
        assert_eq!(r.remove, vec!["a"]);
        let r = reconcile(&[], &["a", "a"]);
        assert_eq!(r.create, vec!["a"]);
    }
}
