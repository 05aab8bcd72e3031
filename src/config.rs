/// What to do with an `offset_start` outside of `0..=end - start`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OffsetPolicy {
    /// Fail with [`crate::InvalidIntervalError::OffsetOutOfSpan`]
    #[default]
    Reject,
    /// Move the offset to the closest bound
    Clamp,
}

/// Knobs for [`crate::flatten_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenConfig {
    pub offset_policy: OffsetPolicy,
}

impl FlattenConfig {
    pub fn with_offset_policy(mut self, offset_policy: OffsetPolicy) -> Self {
        self.offset_policy = offset_policy;
        self
    }
}
