//! Core value containers
//!
//! - [`outcome`](crate::core::outcome) - [`Outcome`](crate::Outcome), success or failure
//! - [`maybe`](crate::core::maybe) - [`Maybe`](crate::Maybe), present or absent
//! - [`conversion`](crate::core::conversion) - interop with `std` `Result` and `Option`

pub mod conversion;
pub mod maybe;
pub mod outcome;

pub use maybe::Maybe;
pub use outcome::Outcome;
