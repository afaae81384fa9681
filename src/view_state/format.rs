//! Display formatting helpers shared by the result renderers.

use std::time::Duration;

/// Characters kept in a batch preview before the ellipsis.
pub const PREVIEW_CHARS: usize = 100;

/// Marker appended to a truncated preview.
pub const ELLIPSIS: &str = "...";

/// Format a count with thousands separators.
///
/// Examples:
/// - `group_thousands(0)` → "0"
/// - `group_thousands(1234)` → "1,234"
/// - `group_thousands(1234567)` → "1,234,567"
pub fn group_thousands(value: usize) -> String {
    let digits: Vec<char> = value.to_string().chars().collect();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Scale a `[0, 1]` fraction to a percentage rounded to one decimal place.
pub fn percentage(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}

/// Elapsed time in whole milliseconds, halves rounded up.
pub fn whole_millis(elapsed: Duration) -> u128 {
    elapsed.saturating_add(Duration::from_micros(500)).as_millis()
}

/// Format a `[0, 1]` fraction as a percentage with one decimal place.
///
/// `0.92` → "92.0%", `0.08` → "8.0%".
pub fn percent_text(fraction: f64) -> String {
    format!("{:.1}%", percentage(fraction))
}

/// Truncate to [`PREVIEW_CHARS`] characters, appending [`ELLIPSIS`] when
/// anything was cut.
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}
