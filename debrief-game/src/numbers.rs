//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Narrow an i64 to the i32 range, saturating at the bounds.
#[must_use]
pub fn saturate_i64_to_i32(value: i64) -> i32 {
    let clamped = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    cast::<i64, i32>(clamped).unwrap_or(0)
}

/// Widen a collection length to i64, saturating for absurdly large sizes.
#[must_use]
pub fn usize_to_i64(value: usize) -> i64 {
    cast::<usize, i64>(value).unwrap_or(i64::MAX)
}

/// Widen an unsigned total to i64, saturating at `i64::MAX`.
#[must_use]
pub fn u64_to_i64(value: u64) -> i64 {
    cast::<u64, i64>(value).unwrap_or(i64::MAX)
}

/// Integer mean truncating toward zero, or 0 for an empty sample.
#[must_use]
pub fn truncated_mean(total: i64, samples: usize) -> i64 {
    if samples == 0 {
        return 0;
    }
    total / usize_to_i64(samples)
}
