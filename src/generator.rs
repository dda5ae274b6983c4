use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter behind request id assignment.
///
/// Each instance owns its own sequence starting at 1, so callers that
/// need independent id spaces (tests included) can hold their own
/// generator instead of sharing process-wide state.
pub struct RequestIdGenerator {
    current_value: AtomicU64,
}

impl RequestIdGenerator {
    pub const fn new() -> Self {
        RequestIdGenerator {
            current_value: AtomicU64::new(0),
        }
    }

    /// Returns the post-increment value: the first call returns 1,
    /// the second 2, and so on. Concurrent callers never observe the
    /// same value twice.
    ///
    /// Relaxed ordering is sufficient: callers rely on uniqueness of
    /// the returned value, not on this operation acting as a fence.
    pub fn next_id(&self) -> u64 {
        self.current_value.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl Default for RequestIdGenerator {
    fn default() -> Self {
        RequestIdGenerator::new()
    }
}
