//! Number formatting for on-page statistics.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format `value` with comma thousands grouping (`1234567` -> `"1,234,567"`).
///
/// This is the grouping used by `ja-JP` and `en-US`, and the native fallback
/// when the browser's `Intl` formatting is unavailable.
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format `value` with the browser's locale rules.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn format_locale(value: u64, locale: &str) -> String {
    let formatted: String = js_sys::Number::from(value as f64).to_locale_string(locale).into();
    if formatted.is_empty() { format_grouped(value) } else { formatted }
}

/// Format `value` for display; natively this is [`format_grouped`].
#[cfg(not(feature = "hydrate"))]
#[must_use]
pub fn format_locale(value: u64, _locale: &str) -> String {
    format_grouped(value)
}
