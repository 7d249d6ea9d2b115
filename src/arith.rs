//! Integer addition with an explicit overflow policy.
//!
//! The FFI layer in `ffi/` calls these functions.

use std::fmt;

/// How a sum outside the `i32` range is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Two's complement wrap-around. This is what `fa_add` does.
    #[default]
    Wrap,
    /// Clamp to `i32::MIN` or `i32::MAX`.
    Saturate,
    /// Reject the sum with `ArithError::Overflow`.
    Checked,
}

/// The only way an addition can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    /// `lhs + rhs` does not fit in an `i32`.
    Overflow { lhs: i32, rhs: i32 },
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithError::Overflow { lhs, rhs } => {
                write!(f, "integer overflow adding {lhs} and {rhs}")
            }
        }
    }
}

impl std::error::Error for ArithError {}

/// Adds `a` and `b` under the given overflow policy.
///
/// Only `OverflowPolicy::Checked` can fail.
pub fn add(a: i32, b: i32, policy: OverflowPolicy) -> Result<i32, ArithError> {
    match policy {
        OverflowPolicy::Wrap => Ok(a.wrapping_add(b)),
        OverflowPolicy::Saturate => Ok(a.saturating_add(b)),
        OverflowPolicy::Checked => a.checked_add(b).ok_or_else(|| {
            log::debug!("rejected overflowing add: {a} + {b}");
            ArithError::Overflow { lhs: a, rhs: b }
        }),
    }
}

/// Adds with two's complement wrap-around.
#[inline]
pub fn wrapping_add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Adds, clamping to `i32::MIN..=i32::MAX`.
#[inline]
pub fn saturating_add(a: i32, b: i32) -> i32 {
    a.saturating_add(b)
}

/// Adds, returning `ArithError::Overflow` when the sum does not fit.
pub fn checked_add(a: i32, b: i32) -> Result<i32, ArithError> {
    add(a, b, OverflowPolicy::Checked)
}
