//! Number and funding formatting for statistic values.

use crate::constants::{CURRENCY_SYMBOL, STR_THOUSANDS_SEPARATOR};
use crate::i18n::Localizer;

/// Group the digits of `value` in threes, keeping the sign in front.
#[must_use]
pub fn format_number(value: i64, separator: &str) -> String {
    group_digits(value, separator, "")
}

/// Like [`format_number`] with a currency prefix after the sign.
#[must_use]
pub fn format_funding(value: i64, separator: &str) -> String {
    group_digits(value, separator, CURRENCY_SYMBOL)
}

fn group_digits(value: i64, separator: &str, currency: &str) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{currency}{grouped}")
}

/// Formatter bound to a localizer's thousands separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    separator: String,
}

impl NumberFormat {
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Pick up the separator from the active string table.
    #[must_use]
    pub fn from_localizer(localizer: &dyn Localizer) -> Self {
        Self::new(
            localizer
                .lookup(STR_THOUSANDS_SEPARATOR)
                .unwrap_or_else(|| ",".to_string()),
        )
    }

    #[must_use]
    pub fn number(&self, value: impl Into<i64>) -> String {
        format_number(value.into(), &self.separator)
    }

    #[must_use]
    pub fn funding(&self, value: i64) -> String {
        format_funding(value, &self.separator)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(",")
    }
}
