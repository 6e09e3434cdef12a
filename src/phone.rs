//! Phone input mask
//!
//! Fixed policy, not schema-configurable: a North American pattern with
//! ten digit slots, unfilled slots shown as `_`. The bound form value
//! is always the unmasked digit string; formatting is display-only.

/// Display pattern; `#` marks a digit slot
pub const PHONE_FORMAT: &str = "+1 (###) - ### - ####";

/// Placeholder character for unfilled slots
pub const PHONE_MASK: char = '_';

/// Number of digit slots in [`PHONE_FORMAT`]
pub fn slot_count() -> usize {
    PHONE_FORMAT.chars().filter(|c| *c == '#').count()
}

/// Extract the ASCII digits from raw input, truncated to the number of
/// slots. Applied to the control's displayed text on every keystroke,
/// so re-entered mask punctuation is ignored.
pub fn strip_digits(input: &str) -> String {
    // The leading "+1 " is format text, but a pasted number may carry
    // its own country code; strip a leading 1 when the rest would
    // overflow the slots.
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = if digits.len() > slot_count() && digits[0] == '1' {
        &digits[1..]
    } else {
        &digits[..]
    };
    digits.iter().take(slot_count()).collect()
}

/// Substitute digits into the pattern, masking unfilled slots. Empty
/// input still renders the full masked pattern.
pub fn format_digits(digits: &str) -> String {
    let mut remaining = digits.chars().filter(|c| c.is_ascii_digit());
    PHONE_FORMAT
        .chars()
        .map(|c| {
            if c == '#' {
                remaining.next().unwrap_or(PHONE_MASK)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_count() {
        assert_eq!(slot_count(), 10);
    }

    #[test]
    fn test_format_full_number() {
        assert_eq!(format_digits("5551234567"), "+1 (555) - 123 - 4567");
    }

    #[test]
    fn test_format_partial_number_masks_rest() {
        assert_eq!(format_digits("555"), "+1 (555) - ___ - ____");
    }

    #[test]
    fn test_format_empty_shows_masked_pattern() {
        assert_eq!(format_digits(""), "+1 (___) - ___ - ____");
    }

    #[test]
    fn test_strip_rejects_punctuation() {
        assert_eq!(strip_digits("+1 (555) - 123 - 4567"), "5551234567");
        assert_eq!(strip_digits("(555) 123-4567"), "5551234567");
    }

    #[test]
    fn test_strip_truncates_overflow() {
        assert_eq!(strip_digits("555123456789"), "5551234567");
    }

    #[test]
    fn test_strip_drops_leading_country_code_on_overflow() {
        assert_eq!(strip_digits("15551234567"), "5551234567");
    }

    #[test]
    fn test_round_trip() {
        let digits = "5551234567";
        assert_eq!(strip_digits(&format_digits(digits)), digits);
    }
}
