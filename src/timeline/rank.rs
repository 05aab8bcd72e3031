//! Sorting, dense ranking and grouping by priority
use std::cmp::Ordering;

use itertools::Itertools;

use super::{Coordinate, Interval};

/// Ordering which treats incomparable values as equal
pub(crate) fn cmp_partial<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if a > b {
        Ordering::Greater
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Stable sort by priority, then by effective start
pub fn sort_by_priority<T: Coordinate, TId>(intervals: &mut [Interval<T, TId>]) {
    intervals.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| cmp_partial(&a.effective_start(), &b.effective_start()))
    });
}

/// Replaces priorities by their dense rank `1..=K`.
///
/// `intervals` has to be sorted by priority already. Equal priorities share
/// a rank and every distinct priority bumps the rank by exactly one, so
/// ranks left over from a previous flattening are compressed again.
pub fn normalize_ranks<T, TId>(intervals: &mut [Interval<T, TId>]) {
    let mut rank = 0;
    let mut last_raw = None;
    for interval in intervals {
        if last_raw.is_none_or(|last| interval.priority > last) {
            last_raw = Some(interval.priority);
            rank += 1;
        }
        interval.priority = rank;
    }
}

/// All intervals of a single rank, ordered by effective start
#[derive(Debug, Clone, PartialEq)]
pub struct RankGroup<T, TId> {
    pub rank: i64,
    pub intervals: Vec<Interval<T, TId>>,
}

/// Splits sorted intervals into groups of equal rank, lowest rank first
pub fn group_by_rank<T, TId>(intervals: Vec<Interval<T, TId>>) -> Vec<RankGroup<T, TId>> {
    let chunks = intervals.into_iter().chunk_by(|x| x.priority);
    chunks
        .into_iter()
        .map(|(rank, group)| RankGroup {
            rank,
            intervals: group.collect(),
        })
        .collect()
}
