//! Panic-to-value adapters
//!
//! [`capture`] and [`capture_async`] are the only boundary where an
//! unwinding panic is turned into an [`Outcome::Failure`]. The raised value
//! is kept as-is inside [`Panic`]; the concrete error type is chosen by the
//! caller when it downcasts.
//!
//! Both adapters rely on `panic = "unwind"`. Under `panic = "abort"` the
//! process terminates before anything can be captured.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::core::outcome::Outcome;

/// Display text for payloads that are neither `&'static str` nor `String`.
const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// A captured panic payload.
///
/// Holds exactly the value passed to `panic!` / [`std::panic::panic_any`];
/// nothing is wrapped or stringified on capture.
pub struct Panic {
    payload: Box<dyn Any + Send>,
}

impl Panic {
    fn captured(payload: Box<dyn Any + Send>) -> Self {
        let panic = Self { payload };
        tracing::debug!(
            target: "verdict::capture",
            panic = %panic,
            "panic captured as failure"
        );
        panic
    }

    /// Text of a `panic!("...")` payload, if the payload is a string.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Whether the raised value is an `E`.
    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    /// Borrow the raised value as an `E`.
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Take the raised value out as an `E`, or get the panic back on a type
    /// mismatch.
    pub fn downcast<E: Any>(self) -> Result<E, Self> {
        self.payload
            .downcast::<E>()
            .map(|boxed| *boxed)
            .map_err(|payload| Self { payload })
    }

    /// The raw payload, e.g. for [`std::panic::resume_unwind`].
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl From<Box<dyn Any + Send>> for Panic {
    fn from(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or(OPAQUE_PAYLOAD))
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panic")
            .field("message", &self.message().unwrap_or(OPAQUE_PAYLOAD))
            .finish()
    }
}

impl std::error::Error for Panic {}

/// Runs `f` once on the current thread and captures a panic as a failure.
///
/// ```rust
/// use verdict::capture;
///
/// assert_eq!(capture(|| 40 + 2).to_option_success().unwrap(), 42);
///
/// let failed = capture(|| -> u32 { panic!("Boom!!!") });
/// assert_eq!(failed.unwrap_failure().message(), Some("Boom!!!"));
/// ```
///
/// `f` is treated as unwind safe. State it shares with the caller may be
/// left half-updated when it panics.
pub fn capture<T, F>(f: F) -> Outcome<T, Panic>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(Panic::captured(payload)),
    }
}

/// Async counterpart of [`capture`].
///
/// Builds the future with `f` and awaits it. A panic while building or while
/// polling becomes a failure. The returned future completes only after the
/// supplied one has; there is no timeout and no retry.
pub async fn capture_async<T, F, Fut>(f: F) -> Outcome<T, Panic>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let future = match capture(f) {
        Outcome::Success(future) => future,
        Outcome::Failure(panic) => return Outcome::Failure(panic),
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(Panic::captured(payload)),
    }
}
