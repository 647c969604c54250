//! Payment card validation: Luhn checksum, BIN scheme classification, and
//! log-safe masking, exposed over HTTP and the command line.
//!
//! The core is four pure functions composed in a fixed pipeline:
//! [`sanitize`] gates untrusted input into [`CardDigits`], then
//! [`is_luhn_valid`] and [`classify`] run independently on the result.
//! [`mask`] is a logging utility and never influences validation.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod luhn;
pub mod mask;
pub mod sanitize;
pub mod scheme;
pub mod validate;

pub use error::{CardwiseError, Result};
pub use luhn::is_luhn_valid;
pub use mask::mask;
pub use sanitize::{sanitize, CardDigits, SanitizeError};
pub use scheme::{classify, Scheme};
pub use validate::{try_validate, validate, ValidationOutcome};
