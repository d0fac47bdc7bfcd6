//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, Utc};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh lower-cased UUID v4 string.
pub fn next_uuid() -> String {
    uuid::Uuid::new_v4().hyphenated().to_string()
}

/// Returns `base` shifted forward by `seconds`.
///
/// Used to give rows distinct, ordered creation times.
pub fn seconds_after(base: DateTime<Utc>, seconds: i64) -> DateTime<Utc> {
    base + Duration::seconds(seconds)
}
