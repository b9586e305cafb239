//! Assertion namespace.
//!
//! Assertions succeed silently with `Ok(())` and fail with a
//! [`KataError::Assertion`]. Inside an `it` case, chain them with `?`:
//!
//! ```rust
//! use kata::assert;
//!
//! fn case() -> kata::CaseResult {
//!     assert::strict_equal(1 + 1, 2)?;
//!     assert::throws(|| "x".parse::<u8>(), None)?;
//!     Ok(())
//! }
//! assert!(case().is_ok());
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::errors::{CaseResult, KataError};
use crate::strict::StrictEq;

/// Fails with `Expected {expected}, but got {actual}` unless the values are
/// strictly equal.
pub fn strict_equal<T: StrictEq>(actual: T, expected: T) -> CaseResult {
    if actual.strict_eq(&expected) {
        return Ok(());
    }
    let expected = expected.render();
    let actual = actual.render();
    Err(KataError::mismatch(
        format!("Expected {}, but got {}", expected, actual),
        expected,
        actual,
    ))
}

pub fn not_strict_equal<T: StrictEq>(actual: T, expected: T) -> CaseResult {
    if !actual.strict_eq(&expected) {
        return Ok(());
    }
    Err(KataError::assertion(format!(
        "Expected {} not to equal {}",
        actual.render(),
        expected.render()
    )))
}

pub fn ok(condition: bool, message: &str) -> CaseResult {
    if condition {
        Ok(())
    } else {
        Err(KataError::assertion(message))
    }
}

/// Runs `action` once and requires it to fail.
///
/// A returned `Err` and a panic both count as a raised signal. When
/// `expected_message` is given and non-empty, the signal's message must match
/// it exactly. The signal itself is consumed.
pub fn throws<T, E, F>(action: F, expected_message: Option<&str>) -> CaseResult
where
    F: FnOnce() -> Result<T, E>,
    E: std::fmt::Display,
{
    let actual_message = match panic::catch_unwind(AssertUnwindSafe(action)) {
        Ok(Ok(_)) => {
            return Err(KataError::assertion(
                "Expected function to throw an error, but it did not",
            ))
        }
        Ok(Err(e)) => e.to_string(),
        Err(payload) => KataError::from_panic(payload).message().to_string(),
    };

    match expected_message {
        Some(expected) if !expected.is_empty() && expected != actual_message => {
            Err(KataError::mismatch(
                format!(
                    "Expected error message \"{}\", but got \"{}\"",
                    expected, actual_message
                ),
                expected,
                actual_message,
            ))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn bad_phone() -> Result<(), KataError> {
        Err(KataError::raised("bad phone"))
    }

    #[test]
    fn strict_equal_passes_on_equal_values() {
        assert_eq!(strict_equal(1 + 1, 2), Ok(()));
        assert_eq!(strict_equal("Anonymous", "Anonymous"), Ok(()));
    }

    #[test]
    fn strict_equal_reports_expected_then_actual() {
        let err = strict_equal(1 + 1, 3).unwrap_err();
        assert_eq!(err.message(), "Expected 3, but got 2");
        assert_eq!(
            err,
            KataError::mismatch("Expected 3, but got 2", "3", "2")
        );
    }

    #[test]
    fn strict_equal_rejects_distinct_allocations() {
        let a = Rc::new(vec![1]);
        let b = Rc::new(vec![1]);
        assert!(strict_equal(Rc::clone(&a), Rc::clone(&b)).is_err());
        assert!(strict_equal(Rc::clone(&a), a).is_ok());
    }

    #[test]
    fn not_strict_equal_is_the_inverse() {
        assert!(not_strict_equal(1, 2).is_ok());
        let err = not_strict_equal("a", "a").unwrap_err();
        assert_eq!(err.message(), "Expected a not to equal a");
    }

    #[test]
    fn ok_uses_the_given_message() {
        assert!(ok(true, "unused").is_ok());
        assert_eq!(ok(false, "must hold").unwrap_err().message(), "must hold");
    }

    #[test]
    fn throws_accepts_any_error_without_expected_message() {
        assert_eq!(throws(bad_phone, None), Ok(()));
        assert_eq!(throws(|| "nope".parse::<i32>(), None), Ok(()));
    }

    #[test]
    fn throws_matches_the_exact_message() {
        assert_eq!(throws(bad_phone, Some("bad phone")), Ok(()));

        let err = throws(bad_phone, Some("bad name")).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected error message \"bad name\", but got \"bad phone\""
        );
    }

    #[test]
    fn throws_fails_when_nothing_is_raised() {
        let err = throws(|| Ok::<(), KataError>(()), Some("bad phone")).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected function to throw an error, but it did not"
        );
    }

    #[test]
    fn throws_treats_an_empty_expected_message_as_absent() {
        assert_eq!(throws(bad_phone, Some("")), Ok(()));
    }

    #[test]
    fn throws_counts_a_panic_as_raised() {
        let result = throws(
            || -> Result<(), KataError> { panic!("overflow") },
            Some("panicked: overflow"),
        );
        assert_eq!(result, Ok(()));
    }
}
