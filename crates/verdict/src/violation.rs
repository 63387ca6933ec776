//! Fatal signal for accessors called on the wrong variant

use thiserror::Error;

/// Misuse of a container accessor.
///
/// Raised as a panic, never returned: a caller that checks the variant before
/// unwrapping never observes one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionViolation {
    /// `Outcome::unwrap` on a `Failure`
    #[error("called `Outcome::unwrap()` on a `Failure` value: {failure}")]
    UnwrapOnFailure {
        /// Debug rendering of the failure payload
        failure: String,
    },

    /// `Outcome::unwrap_failure` on a `Success`
    #[error("called `Outcome::unwrap_failure()` on a `Success` value: {success}")]
    UnwrapFailureOnSuccess {
        /// Debug rendering of the success payload
        success: String,
    },

    /// `Maybe::unwrap` on `Absent`
    #[error("called `Maybe::unwrap()` on an `Absent` value")]
    UnwrapOnAbsent,
}

/// Panic with `violation` as the message, reported at the caller's location.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn violated(violation: PreconditionViolation) -> ! {
    panic!("{violation}")
}
