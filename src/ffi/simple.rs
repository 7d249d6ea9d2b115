//! The fixed-name addition export.

use crate::arith;

/// Adds two integers, wrapping on overflow.
///
/// Exported as the literal symbol `fa_add` for hosts that resolve it by name.
#[no_mangle]
pub extern "C" fn fa_add(a: i32, b: i32) -> i32 {
    arith::wrapping_add(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fa_add() {
        assert_eq!(fa_add(2, 3), 5);
        assert_eq!(fa_add(-1, 1), 0);
        assert_eq!(fa_add(0, 0), 0);
    }

    #[test]
    fn test_fa_add_wraps() {
        assert_eq!(fa_add(i32::MAX, 1), i32::MIN);
        assert_eq!(fa_add(i32::MIN, -1), i32::MAX);
    }
}
