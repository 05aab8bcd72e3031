/// Input interval which can't be placed on a timeline
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIntervalError<T> {
    #[error("interval #{position} ends at {end:?}, which is not after its start {start:?}")]
    EmptySpan { position: usize, start: T, end: T },
    #[error("interval #{position} from {start:?} to {end:?} is too long for its coordinate type")]
    SpanOverflow { position: usize, start: T, end: T },
    #[error("interval #{position} has offset {offset_start:?} outside of 0..={span:?}")]
    OffsetOutOfSpan {
        position: usize,
        offset_start: T,
        span: T,
    },
}

impl<T> InvalidIntervalError<T> {
    /// Position of the offending interval within the caller's input
    pub fn position(&self) -> usize {
        match self {
            Self::EmptySpan { position, .. }
            | Self::SpanOverflow { position, .. }
            | Self::OffsetOutOfSpan { position, .. } => *position,
        }
    }
}
