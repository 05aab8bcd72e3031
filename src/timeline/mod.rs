///
/// Flattening of prioritized intervals into a single timeline
///
mod assert_sorted_iter;
mod combine_iter;
mod interval;
mod merge_rank_iter;
mod rank;

use itertools::Itertools;
use tracing::debug;

pub use assert_sorted_iter::*;
pub use combine_iter::*;
pub use interval::*;
pub use merge_rank_iter::*;
pub use rank::{RankGroup, group_by_rank, normalize_ranks, sort_by_priority};

use crate::config::FlattenConfig;
use crate::error::InvalidIntervalError;

/// [`flatten_with`] using [`FlattenConfig::default`]
pub fn flatten<T: Coordinate, TId: Clone>(
    intervals: &[Interval<T, TId>],
) -> Result<Vec<Interval<T, TId>>, InvalidIntervalError<T>> {
    flatten_with(&FlattenConfig::default(), intervals)
}

/// Resolves all overlaps in favour of the higher priority.
///
/// The result is ordered by effective start and free of overlaps. Intervals
/// keep their `id` and nominal `start`; hidden beginnings are expressed via
/// `offset_start`, cut endings via `end`. Priorities are replaced by dense
/// ranks starting at 1, so the output can be flattened again together with
/// new intervals. `intervals` itself is never modified.
pub fn flatten_with<T: Coordinate, TId: Clone>(
    config: &FlattenConfig,
    intervals: &[Interval<T, TId>],
) -> Result<Vec<Interval<T, TId>>, InvalidIntervalError<T>> {
    let mut working = intervals
        .iter()
        .enumerate()
        .map(|(position, x)| x.clone().validate(position, config.offset_policy))
        .collect::<Result<Vec<_>, _>>()?;

    sort_by_priority(&mut working);
    normalize_ranks(&mut working);
    // Nothing visible, but their priority still takes a rank
    working.retain(|x| !x.is_empty());
    let mut groups = group_by_rank(working).into_iter();
    let rank_count = groups.len();

    let Some(lowest) = groups.next() else {
        return Ok(Vec::new());
    };
    let seed = MergeRankIter::new(lowest.intervals.into_iter()).collect_vec();
    let flattened = groups.fold(seed, |low, group| {
        CombineIter::new(
            MergeRankIter::new(group.intervals.into_iter()),
            low.into_iter(),
        )
        .collect_vec()
    });

    debug!(
        input = intervals.len(),
        ranks = rank_count,
        output = flattened.len(),
        "flattened weighted intervals"
    );
    Ok(flattened)
}

/// Like [`flatten`], treating absent input as empty
pub fn weighted_interval_merge<T: Coordinate, TId: Clone>(
    intervals: Option<&[Interval<T, TId>]>,
) -> Result<Vec<Interval<T, TId>>, InvalidIntervalError<T>> {
    flatten(intervals.unwrap_or_default())
}
