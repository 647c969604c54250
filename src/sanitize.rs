use serde_json::Value;

/// Accepted digit counts after separator stripping (ISO/IEC 7812).
pub const MIN_DIGITS: usize = 12;
pub const MAX_DIGITS: usize = 19;

/// Why an input was rejected before any checksum or scheme logic ran.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanitizeError {
    #[error("card number must be a non-empty string")]
    NotAString,

    #[error("card number must contain only digits")]
    NonDigit,

    #[error("card number must be between {MIN_DIGITS} and {MAX_DIGITS} digits (got {count})")]
    Length { count: usize },
}

/// A separator-free, digits-only card number with a length in
/// `[MIN_DIGITS, MAX_DIGITS]`. Only `sanitize` produces these, so every
/// downstream consumer can rely on the invariant without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDigits(String);

impl CardDigits {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Gate an untyped caller value into a `CardDigits`.
///
/// Strips spaces and hyphens only -- tabs, dots, or anything else left in
/// the string is a format error, not a separator. Digit order is preserved.
pub fn sanitize(input: &Value) -> Result<CardDigits, SanitizeError> {
    let raw = match input.as_str() {
        Some(s) if !s.is_empty() => s,
        _ => return Err(SanitizeError::NotAString),
    };

    let cleaned: String = raw.chars().filter(|c| *c != ' ' && *c != '-').collect();

    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(SanitizeError::NonDigit);
    }

    let count = cleaned.len();
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&count) {
        return Err(SanitizeError::Length { count });
    }

    Ok(CardDigits(cleaned))
}
