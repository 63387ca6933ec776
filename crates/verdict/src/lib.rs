//! # Verdict
//!
//! Explicit, inspectable values for computations that may fail or values
//! that may be absent.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! let parsed: Outcome<u32, String> = Success(42);
//! let text = parsed.chain(|v| Success(v.to_string())).unwrap();
//! assert_eq!(text, "42");
//!
//! let boom = capture(|| -> u32 { std::panic::panic_any("Boom") });
//! assert!(boom.is_failure());
//! assert_eq!(boom.unwrap_failure().downcast_ref::<&str>(), Some(&"Boom"));
//! ```
//!
//! ## Features
//!
//! - **Outcome**: `Success(T)` / `Failure(E)` with short-circuiting `map`,
//!   `map_failure` and `chain`
//! - **Maybe**: `Present(T)` / `Absent` with `map`, `chain` and `unwrap_or`
//! - **Capture**: [`capture`] and [`capture_async`] turn an unwinding panic
//!   into a [`Failure`] holding the raised value verbatim
//!
//! Accessors called on the wrong variant (`unwrap` on a failure, for
//! instance) panic with a [`PreconditionViolation`] message. That panic marks
//! a programming error; it is not part of the represented-failure channel.

pub mod capture;
pub mod core;
pub mod violation;

pub use crate::capture::{Panic, capture, capture_async};
pub use crate::core::{Maybe, Outcome};
pub use crate::violation::PreconditionViolation;

/// Variant constructors, usable unqualified like `Ok`/`None`
pub use crate::core::maybe::Maybe::{Absent, Present};
pub use crate::core::outcome::Outcome::{Failure, Success};

/// Convenient prelude with everything you need
pub mod prelude {
    pub use super::{
        Absent, Failure, Maybe, Outcome, Panic, PreconditionViolation, Present, Success, capture,
        capture_async,
    };
}
