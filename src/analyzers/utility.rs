use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::analyzers::types::{Mode, ValueCount};

/// Computes the most frequent value(s). Returns `None` for empty input.
///
/// Tied values come back in ascending order.
pub fn mode<T, I>(values: I) -> Option<Mode<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let count = counts.values().copied().max()?;
    let values = counts
        .into_iter()
        .filter(|(_, c)| *c == count)
        .map(|(v, _)| v)
        .collect();

    Some(Mode { values, count })
}

/// Like [`mode`], but groups and orders tied values by `key` instead of by
/// the values themselves.
pub fn mode_by<T, K, I, F>(values: I, key: F) -> Option<Mode<T>>
where
    K: Ord,
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> K,
{
    let mut counts: BTreeMap<K, (T, usize)> = BTreeMap::new();
    for value in values {
        counts.entry(key(&value)).or_insert((value, 0)).1 += 1;
    }

    let count = counts.values().map(|(_, c)| *c).max()?;
    let values = counts
        .into_values()
        .filter(|(_, c)| *c == count)
        .map(|(v, _)| v)
        .collect();

    Some(Mode { values, count })
}

/// Counts each distinct value, most frequent first.
///
/// Values with equal counts keep the order they were first seen in.
pub fn value_counts<T, I>(values: I) -> Vec<ValueCount<T>>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<ValueCount<T>> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push(ValueCount { value, count: 1 });
            }
        }
    }

    // stable, so first-seen order survives among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Computes the arithmetic mean of a slice of values. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
