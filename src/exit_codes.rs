//! Exit code constants for the diffscan CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Scan canceled by a signal
//! - 3: Unsupported operation on an annotation

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// The scan was canceled before reaching the end of its input.
pub const SCAN_CANCELED: i32 = 2;

/// An annotation was asked to do something it does not support.
pub const UNSUPPORTED_OPERATION: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, SCAN_CANCELED, UNSUPPORTED_OPERATION];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
