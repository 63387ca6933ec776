//! Present-or-absent container

use crate::violation::{PreconditionViolation, violated};

/// Either a present value or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Maybe<T> {
    /// A value is present
    Present(T),
    /// No value
    #[default]
    Absent,
}

impl<T> Maybe<T> {
    /// `true` only for [`Maybe::Present`].
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// `true` only for [`Maybe::Absent`].
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics with [`PreconditionViolation::UnwrapOnAbsent`] when absent.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => violated(PreconditionViolation::UnwrapOnAbsent),
        }
    }

    /// Returns the payload, or `default_value` when absent.
    #[inline]
    pub fn unwrap_or(self, default_value: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default_value,
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(f(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    #[inline]
    pub fn chain<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Maybe::Absent,
        }
    }
}
