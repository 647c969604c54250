use serde::{Deserialize, Serialize};

use crate::sanitize::CardDigits;

/// Issuing networks recognized by prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Unknown,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scheme::Visa => write!(f, "visa"),
            Scheme::Mastercard => write!(f, "mastercard"),
            Scheme::Amex => write!(f, "amex"),
            Scheme::Discover => write!(f, "discover"),
            Scheme::Unknown => write!(f, "unknown"),
        }
    }
}

/// Map a card number to its issuing network by BIN prefix.
///
/// First match wins. Prefix ranges are compared as fixed-width strings,
/// which is equivalent to numeric comparison since the input is all
/// digits. Checksum validity plays no part here: a number that fails the
/// Luhn check still classifies, so callers can report "looks like a visa
/// but failed validation".
pub fn classify(digits: &CardDigits) -> Scheme {
    let s = digits.as_str();
    let p2 = &s[..2];
    let p4 = &s[..4];
    let p6 = &s[..6];

    if s.starts_with('4') {
        return Scheme::Visa;
    }
    if ("51"..="55").contains(&p2) || ("2221"..="2720").contains(&p4) {
        return Scheme::Mastercard;
    }
    if p2 == "34" || p2 == "37" {
        return Scheme::Amex;
    }
    if p4 == "6011" || p2 == "65" || ("622126"..="622925").contains(&p6) {
        return Scheme::Discover;
    }

    Scheme::Unknown
}
