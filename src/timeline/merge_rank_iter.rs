use super::{Coordinate, DebugAssertSortedByIter, Interval};

///
/// Removes overlaps between intervals of the same rank, left to right.
/// The earlier interval is cut where the later one starts, intervals
/// ending before their predecessor are swallowed by it.
///
pub struct MergeRankIter<TIter, T, TId> {
    iter: std::iter::Fuse<TIter>,
    current: Option<Interval<T, TId>>,
}

impl<TIter, T: Coordinate, TId> MergeRankIter<TIter, T, TId>
where
    TIter: Iterator<Item = Interval<T, TId>>,
{
    pub fn new(iter: TIter) -> MergeRankIter<impl Iterator<Item = Interval<T, TId>>, T, TId> {
        MergeRankIter {
            iter: DebugAssertSortedByIter::new(iter, |x: &Interval<T, TId>| x.effective_start())
                .fuse(),
            current: None,
        }
    }
}

impl<TIter, T: Coordinate, TId> Iterator for MergeRankIter<TIter, T, TId>
where
    TIter: Iterator<Item = Interval<T, TId>>,
{
    type Item = Interval<T, TId>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current = self.current.take().or_else(|| self.iter.next())?;
        loop {
            let Some(next) = self.iter.next() else {
                return Some(current);
            };
            if current.end >= next.end {
                continue;
            }
            let next_start = next.effective_start();
            if next_start >= current.end {
                self.current = Some(next);
                return Some(current);
            }
            if next_start > current.effective_start() {
                self.current = Some(next);
                return Some(current.truncated(next_start));
            }
            // Same start, nothing of current remains visible
            current = next;
        }
    }
}
