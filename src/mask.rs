/// Character used to replace hidden digits.
pub const MASK_CHAR: char = '*';

/// Redact a card number for logs and display, keeping only the last 4
/// characters. Inputs of 4 characters or fewer are masked in full -- a
/// short string is never echoed back.
///
/// Works on any string, including ones that failed sanitization, so the
/// error path can log what it received without leaking it. Never fails.
pub fn mask(input: &str) -> String {
    let total = input.chars().count();
    if total <= 4 {
        return MASK_CHAR.to_string().repeat(total);
    }

    let hidden = total - 4;
    input
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { MASK_CHAR } else { c })
        .collect()
}
