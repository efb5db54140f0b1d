// File: crates/survival-core/src/group.rs
// Summary: Filter observations by grouping variable and partition them into keyed groups.

use std::collections::HashMap;

use crate::dataset::{Dataset, GroupKey};

/// Observations sharing one value of the active grouping variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub key: GroupKey,
    /// `(time, survival)` in input order.
    pub points: Vec<(f64, f64)>,
}

/// Groups of `data` for `variable`, in first-seen key order.
///
/// Only records whose `variable` equals `variable` take part. Matching records
/// without a usable grouping value are skipped with a warning.
pub fn group_by(data: &Dataset, variable: &str) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut skipped = 0usize;

    for r in data.filter(variable) {
        let Some(key) = r.group_key(variable) else {
            skipped += 1;
            continue;
        };
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(Group { key, points: Vec::new() });
            groups.len() - 1
        });
        groups[slot].points.push((r.time, r.survival));
    }

    if skipped > 0 {
        log::warn!("skipped {skipped} `{variable}` records without a `{variable}` value");
    }
    groups
}

/// Largest time among records of `variable`, or `None` if there are none.
pub fn max_time(data: &Dataset, variable: &str) -> Option<f64> {
    data.filter(variable).map(|r| r.time).fold(None, |acc, t| match acc {
        Some(m) if m >= t => Some(m),
        _ => Some(t),
    })
}
