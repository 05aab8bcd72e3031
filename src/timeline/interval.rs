use std::fmt::Debug;
use std::ops::Range;

use crate::config::OffsetPolicy;
use crate::error::InvalidIntervalError;

/// Priority assigned by [`Interval::new`] when the caller doesn't choose one
pub const DEFAULT_PRIORITY: i64 = 1;

/// Anything that can be used as a position on the timeline
pub trait Coordinate: num_traits::Num + PartialOrd + Copy + Debug {
    /// `end - start`, or `None` if it isn't representable
    fn checked_span(start: Self, end: Self) -> Option<Self>;
}

macro_rules! integer_coordinate {
    ($($t:ty),*) => {
        $(impl Coordinate for $t {
            fn checked_span(start: Self, end: Self) -> Option<Self> {
                num_traits::CheckedSub::checked_sub(&end, &start)
            }
        })*
    };
}

integer_coordinate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Coordinate for f32 {
    fn checked_span(start: Self, end: Self) -> Option<Self> {
        Some(end - start)
    }
}

impl Coordinate for f64 {
    fn checked_span(start: Self, end: Self) -> Option<Self> {
        Some(end - start)
    }
}

/// A span `start..end` of which only `start + offset_start..end` is visible.
///
/// `offset_start` lets an interval be partially hidden at its beginning
/// without losing the nominal `start`, which is what consumers usually
/// need to seek into the underlying content.
/// Higher `priority` wins when intervals overlap.
#[derive(Clone, PartialEq)]
pub struct Interval<T, TId = ()> {
    pub id: TId,
    pub start: T,
    pub offset_start: T,
    pub end: T,
    pub priority: i64,
}

impl<T: Debug, TId: Debug> Debug for Interval<T, TId> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{:?}: {:?}(+{:?})..{:?} @{}",
            self.id, self.start, self.offset_start, self.end, self.priority
        ))
    }
}

impl<T: Coordinate, TId> Interval<T, TId> {
    pub fn new(id: TId, start: T, end: T) -> Self {
        Self {
            id,
            start,
            offset_start: T::zero(),
            end,
            priority: DEFAULT_PRIORITY,
        }
    }

    pub fn with_offset_start(mut self, offset_start: T) -> Self {
        self.offset_start = offset_start;
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn effective_start(&self) -> T {
        self.start + self.offset_start
    }

    pub fn effective_range(&self) -> Range<T> {
        self.effective_start()..self.end
    }

    pub fn is_empty(&self) -> bool {
        !(self.effective_start() < self.end)
    }

    /// Half-open overlap of the visible parts
    pub fn overlaps<TOther>(&self, other: &Interval<T, TOther>) -> bool {
        self.effective_start() < other.end && other.effective_start() < self.end
    }

    /// Checks the span and offset. `position` only ends up in the error.
    ///
    /// `end` must lie strictly after `start` and `end - start` has to fit
    /// into `T`. `offset_start` has to stay within `0..=end - start`;
    /// depending on `policy` it is either rejected or clamped to the
    /// closest bound. NaN coordinates are always rejected.
    pub fn validate(
        mut self,
        position: usize,
        policy: OffsetPolicy,
    ) -> Result<Self, InvalidIntervalError<T>> {
        if !(self.start < self.end) {
            return Err(InvalidIntervalError::EmptySpan {
                position,
                start: self.start,
                end: self.end,
            });
        }
        let Some(span) = T::checked_span(self.start, self.end) else {
            return Err(InvalidIntervalError::SpanOverflow {
                position,
                start: self.start,
                end: self.end,
            });
        };
        let zero = T::zero();
        let offset = self.offset_start;
        if offset >= zero && offset <= span {
            return Ok(self);
        }
        let out_of_span = InvalidIntervalError::OffsetOutOfSpan {
            position,
            offset_start: offset,
            span,
        };
        match policy {
            OffsetPolicy::Reject => Err(out_of_span),
            OffsetPolicy::Clamp if offset < zero => {
                self.offset_start = zero;
                Ok(self)
            }
            OffsetPolicy::Clamp if offset > span => {
                self.offset_start = span;
                Ok(self)
            }
            // Not comparable at all
            OffsetPolicy::Clamp => Err(out_of_span),
        }
    }

    pub(crate) fn truncated(mut self, end: T) -> Self {
        self.end = end;
        self
    }

    /// Hides everything before `point`, keeping the nominal `start`
    pub(crate) fn resume_at(&mut self, point: T) {
        self.offset_start = point - self.start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_offset_and_priority() {
        let interval = Interval::new("a", 0, 30);
        assert_eq!(0, interval.offset_start);
        assert_eq!(DEFAULT_PRIORITY, interval.priority);
        assert_eq!(0..30, interval.effective_range());
    }

    #[test]
    fn offset_moves_effective_start() {
        let interval = Interval::new((), 0.0, 28.5).with_offset_start(1.0);
        assert_eq!(1.0, interval.effective_start());
        assert_eq!(1.0..28.5, interval.effective_range());
        assert_eq!(0.0, interval.start);
    }

    #[test]
    fn non_overlapping_adjacent() {
        test_both_way(0..5, 5..10, false);
    }

    #[test]
    fn overlapping() {
        test_both_way(0..5, 3..7, true);
    }

    #[test]
    fn one_inside_other() {
        test_both_way(2..4, 1..5, true);
    }

    #[test]
    fn same_ranges() {
        test_both_way(3..7, 3..7, true);
    }

    #[test]
    fn offset_removes_overlap() {
        let a = Interval::new((), 0, 10).with_offset_start(6);
        let b = Interval::new((), 2, 6);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn rejects_end_before_start() {
        assert_eq!(
            Err(InvalidIntervalError::EmptySpan {
                position: 3,
                start: 10,
                end: 10
            }),
            Interval::new((), 10, 10).validate(3, OffsetPolicy::Reject)
        );
    }

    #[test]
    fn rejects_span_not_fitting_coordinate() {
        assert_eq!(
            Err(InvalidIntervalError::SpanOverflow {
                position: 1,
                start: i32::MIN,
                end: i32::MAX
            }),
            Interval::new((), i32::MIN, i32::MAX).validate(1, OffsetPolicy::Clamp)
        );
        assert!(
            Interval::new((), 0u8, u8::MAX)
                .validate(0, OffsetPolicy::Reject)
                .is_ok()
        );
    }

    #[test]
    fn float_span_never_overflows() {
        assert!(
            Interval::new((), f64::MIN, f64::MAX)
                .validate(0, OffsetPolicy::Reject)
                .is_ok()
        );
    }

    #[test]
    fn rejects_nan_span() {
        assert!(
            Interval::new((), f64::NAN, 1.0)
                .validate(0, OffsetPolicy::Clamp)
                .is_err()
        );
    }

    #[test]
    fn offset_at_span_is_valid() {
        let interval = Interval::new((), 5, 10).with_offset_start(5);
        assert!(interval.clone().validate(0, OffsetPolicy::Reject).is_ok());
        assert!(interval.is_empty());
    }

    #[test]
    fn rejects_or_clamps_offset() {
        let negative = Interval::new((), 5, 10).with_offset_start(-2);
        assert_eq!(
            Err(InvalidIntervalError::OffsetOutOfSpan {
                position: 0,
                offset_start: -2,
                span: 5
            }),
            negative.clone().validate(0, OffsetPolicy::Reject)
        );
        assert_eq!(
            Ok(0),
            negative
                .validate(0, OffsetPolicy::Clamp)
                .map(|x| x.offset_start)
        );
        assert_eq!(
            Ok(5),
            Interval::new((), 5, 10)
                .with_offset_start(7)
                .validate(0, OffsetPolicy::Clamp)
                .map(|x| x.offset_start)
        );
    }

    #[test]
    fn clamp_still_rejects_nan_offset() {
        assert!(
            Interval::new((), 0.0, 1.0)
                .with_offset_start(f64::NAN)
                .validate(0, OffsetPolicy::Clamp)
                .is_err()
        );
    }

    #[test]
    fn resume_keeps_nominal_start() {
        let mut interval = Interval::new((), 0, 30);
        interval.resume_at(10);
        assert_eq!(0, interval.start);
        assert_eq!(10, interval.offset_start);
        assert_eq!(10..30, interval.effective_range());
    }

    fn test_both_way(a: Range<u32>, b: Range<u32>, expected: bool) {
        let a = Interval::new((), a.start, a.end);
        let b = Interval::new((), b.start, b.end);
        assert_eq!(expected, a.overlaps(&b));
        assert_eq!(expected, b.overlaps(&a));
    }
}
