//! Success-or-failure container

use std::fmt;

use crate::core::maybe::Maybe::{self, Absent, Present};
use crate::violation::{PreconditionViolation, violated};

/// Either a success value or a failure value, never both.
///
/// Every transformation short-circuits: closures written for one variant are
/// never invoked on the other.
///
/// ```rust
/// use verdict::{Failure, Outcome, Success};
///
/// fn halve(n: u32) -> Outcome<u32, String> {
///     if n % 2 == 0 { Success(n / 2) } else { Failure(format!("{n} is odd")) }
/// }
///
/// assert_eq!(Success(12).chain(halve).chain(halve), Success(3));
/// assert_eq!(Success(12).chain(halve).chain(halve).chain(halve), Failure("3 is odd".to_owned()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    /// The computation succeeded
    Success(T),
    /// The computation failed
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// `true` only for [`Outcome::Success`].
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` only for [`Outcome::Failure`].
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Success payload as [`Present`], [`Absent`] for a failure.
    // Consuming `to_*` mirrors the `to_option_failure` pair; payloads are not cloned.
    #[allow(clippy::wrong_self_convention)]
    #[inline]
    pub fn to_option_success(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Present(value),
            Self::Failure(_) => Absent,
        }
    }

    /// Failure payload as [`Present`], [`Absent`] for a success.
    #[allow(clippy::wrong_self_convention)]
    #[inline]
    pub fn to_option_failure(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Absent,
            Self::Failure(error) => Present(error),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`PreconditionViolation::UnwrapOnFailure`] when called on a
    /// failure; the message carries the `Debug` rendering of the payload.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => violated(PreconditionViolation::UnwrapOnFailure {
                failure: format!("{error:?}"),
            }),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`PreconditionViolation::UnwrapFailureOnSuccess`] when
    /// called on a success.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => violated(PreconditionViolation::UnwrapFailureOnSuccess {
                success: format!("{value:?}"),
            }),
            Self::Failure(error) => error,
        }
    }

    /// Applies `f` to a success payload. A failure passes through untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `f` to a failure payload. A success passes through untouched.
    #[inline]
    pub fn map_failure<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Sequences a fallible step after a success, stopping at the first failure.
    #[inline]
    pub fn chain<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}
