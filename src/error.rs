//! Error types.
//!
//! The crate has a single failure mode: a required top-level argument
//! handed to one of the `try_*` entry points was absent. Everything else
//! (empty sequences, absent inner sequences, default values) is valid input
//! and handled by filtering.

use thiserror::Error;

/// A required argument was absent.
///
/// Raised before any processing starts; no partial result accompanies it.
///
/// # Examples
///
/// ```rust
/// use multiseq::ArgumentError;
///
/// let error = ArgumentError::new("sequences");
/// assert_eq!(error.name(), "sequences");
/// assert_eq!(
///     error.to_string(),
///     "argument `sequences` must not be absent"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("argument `{name}` must not be absent")]
pub struct ArgumentError {
    name: &'static str,
}

impl ArgumentError {
    /// Creates an error for the argument called `name`.
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Returns the name of the absent argument.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Unwraps a required argument or reports it as absent.
pub(crate) fn required<T>(value: Option<T>, name: &'static str) -> Result<T, ArgumentError> {
    value.ok_or_else(|| {
        tracing::debug!(argument = name, "required argument absent");
        ArgumentError::new(name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("sequences", "argument `sequences` must not be absent")]
    #[case("key_selector", "argument `key_selector` must not be absent")]
    fn test_argument_error_display(#[case] name: &'static str, #[case] expected: &str) {
        assert_eq!(ArgumentError::new(name).to_string(), expected);
    }

    #[rstest]
    fn test_required_passes_present_value_through() {
        assert_eq!(required(Some(7), "value"), Ok(7));
    }

    #[rstest]
    fn test_required_reports_absent_value() {
        let result: Result<i32, _> = required(None, "sequences");
        assert_eq!(result, Err(ArgumentError::new("sequences")));
    }

    #[rstest]
    fn test_argument_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(ArgumentError::new("rows"));
        assert!(error.source().is_none());
    }
}
