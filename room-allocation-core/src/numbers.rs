//! Numeric conversion helpers centralizing casts between guest counts and stepper values.

use num_traits::cast::cast;

/// Widen a guest count into the signed stepper domain, saturating at `i32::MAX`.
#[must_use]
pub fn count_to_value(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

/// Narrow a stepper value back into a guest count; negative values have no count.
#[must_use]
pub fn value_to_count(value: i32) -> Option<u32> {
    u32::try_from(value).ok()
}

/// Convert a finite, integral float into an `i32`, rejecting fractions and overflow.
#[must_use]
pub fn integral_f64_to_i32(value: f64) -> Option<i32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    cast::<f64, i32>(value)
}
