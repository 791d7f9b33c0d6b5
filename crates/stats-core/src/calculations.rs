//! Frequency statistics shared by the aggregators.
//!
//! The tie-break rule is part of the contract: among values tied for the
//! maximum count, the value first encountered in iteration order wins.
//! That keeps the result deterministic for numbers, weekday values, and
//! station names alike.

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value in `values`, `None` on empty input.
///
/// Ties broken by first-encountered value in iteration order.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (u64, usize)> = HashMap::new();

    for (index, value) in values.into_iter().enumerate() {
        let slot = counts.entry(value).or_insert((0, index));
        slot.0 += 1;
    }

    counts
        .into_iter()
        // Max count wins; on equal counts the smaller first-seen index wins.
        .max_by(|(_, (ca, ia)), (_, (cb, ib))| ca.cmp(cb).then(ib.cmp(ia)))
        .map(|(value, _)| value)
}

/// Per-value counts sorted descending by count.
///
/// Ties keep first-encountered order, so the output is stable for a given
/// input sequence.
pub fn counts_desc<T, I>(values: I) -> Vec<(T, u64)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (u64, usize)> = HashMap::new();

    for (index, value) in values.into_iter().enumerate() {
        let slot = counts.entry(value).or_insert((0, index));
        slot.0 += 1;
    }

    let mut out: Vec<(T, u64, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    out.into_iter().map(|(value, count, _)| (value, count)).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
