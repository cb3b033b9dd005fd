//! Error types for bounded adaptors.
//!
//! Most misuse of an adaptor is rejected when the program is built. The
//! exceptions are the adaptors whose work depends on runtime values: a
//! bounded fixed point whose recursion goes too deep, and a conditional
//! repeat whose predicate never turns false. Both report an explicit error
//! value instead of exhausting the stack or looping forever.

/// A [`BoundedFix`](crate::recursion::BoundedFix) recursed deeper than its
/// configured limit.
///
/// # Examples
///
/// ```rust
/// use fnfit::RecursionLimitExceeded;
///
/// let error = RecursionLimitExceeded { max_depth: 16 };
/// assert_eq!(format!("{error}"), "recursion exceeded the maximum depth of 16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecursionLimitExceeded {
    /// The depth that was exceeded.
    pub max_depth: usize,
}

impl std::fmt::Display for RecursionLimitExceeded {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "recursion exceeded the maximum depth of {}",
            self.max_depth
        )
    }
}

impl std::error::Error for RecursionLimitExceeded {}

/// A [`RepeatWhile`](crate::recursion::RepeatWhile) reached its iteration
/// limit while the predicate still held.
///
/// # Examples
///
/// ```rust
/// use fnfit::IterationLimitExceeded;
///
/// let error = IterationLimitExceeded { max_iterations: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "predicate still held after 3 iterations"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IterationLimitExceeded {
    /// The number of iterations that were performed.
    pub max_iterations: usize,
}

impl std::fmt::Display for IterationLimitExceeded {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "predicate still held after {} iterations",
            self.max_iterations
        )
    }
}

impl std::error::Error for IterationLimitExceeded {}

/// Any error produced by an adaptor in this crate.
///
/// # Examples
///
/// ```rust
/// use fnfit::{AdaptorError, RecursionLimitExceeded};
///
/// let error: AdaptorError = RecursionLimitExceeded { max_depth: 2 }.into();
/// assert!(matches!(error, AdaptorError::RecursionLimit(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdaptorError {
    /// A bounded fixed point went too deep.
    RecursionLimit(RecursionLimitExceeded),
    /// A conditional repeat did not terminate in time.
    IterationLimit(IterationLimitExceeded),
}

impl std::fmt::Display for AdaptorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecursionLimit(error) => write!(formatter, "{error}"),
            Self::IterationLimit(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for AdaptorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RecursionLimit(error) => Some(error),
            Self::IterationLimit(error) => Some(error),
        }
    }
}

impl From<RecursionLimitExceeded> for AdaptorError {
    fn from(error: RecursionLimitExceeded) -> Self {
        Self::RecursionLimit(error)
    }
}

impl From<IterationLimitExceeded> for AdaptorError {
    fn from(error: IterationLimitExceeded) -> Self {
        Self::IterationLimit(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_recursion_limit_display() {
        let error = RecursionLimitExceeded { max_depth: 0 };
        assert_eq!(
            format!("{error}"),
            "recursion exceeded the maximum depth of 0"
        );
    }

    #[test]
    fn test_adaptor_error_display_delegates() {
        let error = AdaptorError::from(IterationLimitExceeded { max_iterations: 10 });
        assert_eq!(format!("{error}"), "predicate still held after 10 iterations");
    }

    #[test]
    fn test_adaptor_error_source_is_inner_error() {
        let error = AdaptorError::from(RecursionLimitExceeded { max_depth: 5 });
        let source = error.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("recursion exceeded the maximum depth of 5")
        );
    }
}
