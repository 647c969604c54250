use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::luhn::is_luhn_valid;
use crate::sanitize::{sanitize, SanitizeError};
use crate::scheme::{classify, Scheme};

/// The result of validating one candidate card number. Built exactly once
/// per request and never mutated; `scheme` is always populated, even for
/// numbers that fail the checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub scheme: Scheme,
    pub message: String,
}

impl ValidationOutcome {
    fn ok(scheme: Scheme) -> Self {
        Self {
            valid: true,
            scheme,
            message: "OK".into(),
        }
    }

    fn checksum_failed(scheme: Scheme) -> Self {
        Self {
            valid: false,
            scheme,
            message: "card number is invalid (Luhn check failed)".into(),
        }
    }

    fn rejected(err: &SanitizeError) -> Self {
        Self {
            valid: false,
            scheme: Scheme::Unknown,
            message: err.to_string(),
        }
    }
}

/// Validate a raw, untyped card number.
///
/// The sanitizer is the sole gate: on rejection the checksum engine and
/// classifier never run, and the error is returned on its own channel so
/// transport code can surface it differently from a checksum failure.
/// A well-formed number always classifies, whether or not it passes Luhn.
pub fn try_validate(raw: &Value) -> Result<ValidationOutcome, SanitizeError> {
    let digits = sanitize(raw)?;
    let scheme = classify(&digits);

    if !is_luhn_valid(&digits) {
        return Ok(ValidationOutcome::checksum_failed(scheme));
    }

    Ok(ValidationOutcome::ok(scheme))
}

/// Total variant of [`try_validate`]: sanitizer rejections fold into the
/// outcome with `scheme: unknown` and the specific rejection message.
pub fn validate(raw: &Value) -> ValidationOutcome {
    match try_validate(raw) {
        Ok(outcome) => outcome,
        Err(err) => ValidationOutcome::rejected(&err),
    }
}
