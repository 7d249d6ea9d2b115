//! Addition exports with an explicit overflow policy.

use crate::arith::{self, ArithError};

/// The sum was written to `out`.
pub const FA_OK: i32 = 0;
/// `out` was null.
pub const FA_ERR_NULL: i32 = 1;
/// The sum does not fit in an `i32`.
pub const FA_ERR_OVERFLOW: i32 = 2;

/// Adds two integers, reporting overflow instead of wrapping.
///
/// # Safety
/// - `out` must be a valid, writable pointer to an `i32`, or null
///
/// # Returns
/// `FA_OK` with the sum in `*out`, `FA_ERR_NULL` if `out` is null, or
/// `FA_ERR_OVERFLOW`. `*out` is only written on success.
#[no_mangle]
pub unsafe extern "C" fn fa_add_checked(a: i32, b: i32, out: *mut i32) -> i32 {
    if out.is_null() {
        return FA_ERR_NULL;
    }

    match arith::checked_add(a, b) {
        Ok(sum) => {
            *out = sum;
            FA_OK
        }
        Err(ArithError::Overflow { .. }) => FA_ERR_OVERFLOW,
    }
}

/// Adds two integers, clamping to `i32::MIN..=i32::MAX` on overflow.
#[no_mangle]
pub extern "C" fn fa_add_saturating(a: i32, b: i32) -> i32 {
    arith::saturating_add(a, b)
}
