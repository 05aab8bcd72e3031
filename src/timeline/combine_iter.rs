use tracing::trace;

use super::{Coordinate, DebugAssertSortedByIter, Interval};

///
/// Lays a run of higher ranked intervals over a run of lower ranked ones.
///
/// Both inputs have to be free of overlaps and ordered by effective start.
/// Wherever they collide, the high interval is kept as is while the low one
/// is cut short, resumed after the high one or dropped entirely.
///
pub struct CombineIter<THigh, TLow, T, TId> {
    high: std::iter::Fuse<THigh>,
    low: std::iter::Fuse<TLow>,
    high_cursor: Option<Interval<T, TId>>,
    // May have been resumed at a later point than it arrived with
    low_cursor: Option<Interval<T, TId>>,
}

impl<THigh, TLow, T: Coordinate, TId: Clone> CombineIter<THigh, TLow, T, TId>
where
    THigh: Iterator<Item = Interval<T, TId>>,
    TLow: Iterator<Item = Interval<T, TId>>,
{
    pub fn new(
        high: THigh,
        low: TLow,
    ) -> CombineIter<
        impl Iterator<Item = Interval<T, TId>>,
        impl Iterator<Item = Interval<T, TId>>,
        T,
        TId,
    > {
        CombineIter {
            high: DebugAssertSortedByIter::new(high, |x: &Interval<T, TId>| x.effective_start())
                .fuse(),
            low: DebugAssertSortedByIter::new(low, |x: &Interval<T, TId>| x.effective_start())
                .fuse(),
            high_cursor: None,
            low_cursor: None,
        }
    }
}

impl<THigh, TLow, T: Coordinate, TId: Clone> Iterator for CombineIter<THigh, TLow, T, TId>
where
    THigh: Iterator<Item = Interval<T, TId>>,
    TLow: Iterator<Item = Interval<T, TId>>,
{
    type Item = Interval<T, TId>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let high = self.high_cursor.take().or_else(|| self.high.next());
            let low = self.low_cursor.take().or_else(|| self.low.next());
            let (high, mut low) = match (high, low) {
                (None, None) => return None,
                (Some(high), None) => return Some(high),
                (None, Some(low)) => return Some(low),
                (Some(high), Some(low)) => (high, low),
            };
            let high_start = high.effective_start();
            let low_start = low.effective_start();

            if high_start <= low_start {
                if high.end >= low.end {
                    // high:  -----------
                    // low:     ------
                    // The next low could still be covered by the same high
                    trace!(?high_start, high_end = ?high.end, ?low_start, "low interval covered");
                    self.high_cursor = Some(high);
                    continue;
                }
                if high.end > low_start {
                    // high:  ------
                    // low:      -------
                    low.resume_at(high.end);
                }
                self.low_cursor = Some(low);
                return Some(high);
            }

            if low.end <= high_start {
                // high:         ------
                // low:   ------
                self.high_cursor = Some(high);
                return Some(low);
            }
            if high.end >= low.end {
                // high:      ------
                // low:   ------
                self.high_cursor = Some(high);
                return Some(low.truncated(high_start));
            }
            // high:     ----
            // low:   ----------
            trace!(?high_start, high_end = ?high.end, ?low_start, "low interval split");
            let head = low.clone().truncated(high_start);
            low.resume_at(high.end);
            self.high_cursor = Some(high);
            self.low_cursor = Some(low);
            return Some(head);
        }
    }
}
