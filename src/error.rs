use thiserror::Error;

/// Errors reported by [`RingBuffer`](crate::RingBuffer) element access.
///
/// Capacity conditions (pushing into a full buffer, popping an empty one) are
/// routine and reported as `false` from `push`/`pop`, not through this type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// The requested offset lies outside `[0, count)`.
    ///
    /// `offset` is widened to `i128` so both unsigned and signed requests
    /// are reported exactly as the caller passed them.
    #[error("offset {offset} is out of range for {count} queued element(s)")]
    OutOfRange {
        /// Offset the caller asked for, counted from the oldest element
        offset: i128,
        /// Number of elements queued at the time of the request
        count: usize,
    },
}

/// Result alias for ring buffer access
pub type Result<T> = std::result::Result<T, RingError>;
