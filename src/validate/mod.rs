//! Input validation (pure).
//!
//! Both validators trim surrounding whitespace and measure length in
//! characters (Unicode scalar values). Rules are checked in a fixed order
//! and the first failing rule wins.

use crate::model::{BatchRequest, SingleRequest, ValidationError};

/// Minimum characters for a single text, inclusive.
pub const MIN_TEXT_CHARS: usize = 3;

/// Maximum characters for any text, inclusive.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Maximum number of texts in one batch, inclusive.
pub const MAX_BATCH_TEXTS: usize = 100;

/// Validate single-mode input.
///
/// Order: empty after trim, too short, too long.
pub fn validate_single(text: &str) -> Result<SingleRequest, ValidationError> {
    let trimmed = text.trim();
    let length = trimmed.chars().count();

    if length == 0 {
        return Err(ValidationError::MissingText);
    }
    if length < MIN_TEXT_CHARS {
        return Err(ValidationError::TooShort { length });
    }
    if length > MAX_TEXT_CHARS {
        return Err(ValidationError::TooLong { length });
    }

    Ok(SingleRequest {
        text: trimmed.to_string(),
    })
}

/// Validate a line-delimited batch block.
///
/// Lines are split on `\n` (a trailing `\r` is trimmed with the rest of the
/// whitespace), trimmed, and blank lines are dropped before counting.
/// Order: no lines left, too many lines, first over-long line.
pub fn validate_batch(block: &str) -> Result<BatchRequest, ValidationError> {
    let texts = non_blank_lines(block);

    if texts.is_empty() {
        return Err(ValidationError::MissingTexts);
    }
    if texts.len() > MAX_BATCH_TEXTS {
        return Err(ValidationError::TooManyTexts { count: texts.len() });
    }
    if let Some((index, length)) = texts
        .iter()
        .map(|text| text.chars().count())
        .enumerate()
        .find(|(_, length)| *length > MAX_TEXT_CHARS)
    {
        return Err(ValidationError::TextTooLong {
            position: index + 1,
            length,
        });
    }

    Ok(BatchRequest { texts })
}

/// Trimmed, non-blank lines of a batch block in original order.
///
/// Also drives the live line counter in the batch input.
pub fn non_blank_lines(block: &str) -> Vec<String> {
    block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_rejects_whitespace_only_as_missing() {
        assert_eq!(validate_single("   \n\t "), Err(ValidationError::MissingText));
    }

    #[test]
    fn single_rejects_two_characters_as_too_short() {
        assert_eq!(
            validate_single("ok"),
            Err(ValidationError::TooShort { length: 2 })
        );
    }

    #[test]
    fn single_accepts_boundaries_inclusive() {
        assert!(validate_single("abc").is_ok());
        assert!(validate_single(&"a".repeat(MAX_TEXT_CHARS)).is_ok());
    }

    #[test]
    fn single_rejects_one_over_maximum() {
        assert_eq!(
            validate_single(&"a".repeat(MAX_TEXT_CHARS + 1)),
            Err(ValidationError::TooLong { length: 5001 })
        );
    }

    #[test]
    fn single_returns_trimmed_text() {
        let request = validate_single("  Great product, highly recommend!  \n").unwrap();
        assert_eq!(request.text, "Great product, highly recommend!");
    }

    #[test]
    fn single_length_ignores_surrounding_whitespace() {
        let padded = format!("   {}   ", "a".repeat(MAX_TEXT_CHARS));
        assert!(validate_single(&padded).is_ok());
    }

    #[test]
    fn single_counts_multibyte_characters_once() {
        // 3 characters, 9 bytes
        assert!(validate_single("日本語").is_ok());
    }

    #[test]
    fn batch_drops_blank_lines_and_trims() {
        let request = validate_batch("\n  first  \n\n   \nsecond\r\n").unwrap();
        assert_eq!(request.texts, vec!["first", "second"]);
    }

    #[test]
    fn batch_rejects_empty_block() {
        assert_eq!(validate_batch(""), Err(ValidationError::MissingTexts));
        assert_eq!(validate_batch("\n \n\t\n"), Err(ValidationError::MissingTexts));
    }

    #[test]
    fn batch_accepts_exactly_one_hundred_lines() {
        let block = vec!["line"; MAX_BATCH_TEXTS].join("\n");
        assert_eq!(validate_batch(&block).unwrap().texts.len(), 100);
    }

    #[test]
    fn batch_rejects_one_hundred_and_one_lines() {
        let block = vec!["line"; MAX_BATCH_TEXTS + 1].join("\n");
        assert_eq!(
            validate_batch(&block),
            Err(ValidationError::TooManyTexts { count: 101 })
        );
    }

    #[test]
    fn batch_count_rule_wins_over_length_rule() {
        let mut lines = vec!["x".to_string(); MAX_BATCH_TEXTS + 1];
        lines[0] = "y".repeat(MAX_TEXT_CHARS + 1);
        assert!(matches!(
            validate_batch(&lines.join("\n")),
            Err(ValidationError::TooManyTexts { .. })
        ));
    }

    #[test]
    fn batch_reports_position_among_non_blank_lines() {
        let long = "z".repeat(MAX_TEXT_CHARS + 1);
        let block = format!("one\n\n\ntwo\n{long}\n{long}");

        assert_eq!(
            validate_batch(&block),
            Err(ValidationError::TextTooLong {
                position: 3,
                length: MAX_TEXT_CHARS + 1
            })
        );
    }

    #[test]
    fn batch_does_not_enforce_single_minimum_length() {
        assert_eq!(validate_batch("a").unwrap().texts, vec!["a"]);
    }

    #[test]
    fn non_blank_lines_preserves_order() {
        assert_eq!(non_blank_lines("c\nb\n\na"), vec!["c", "b", "a"]);
    }
}
