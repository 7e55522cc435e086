//! Locale aware number formatting.
use crate::util::group_digits;

/// Separators and precision used to write a number for a given locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separator between the integer and the fractional part.
    pub decimal_separator: char,
    /// Separator between groups of three digits of the integer part.
    pub group_separator: char,
    /// Maximum number of fractional digits written. Trailing zeros are never written.
    pub max_fraction_digits: u8,
}

impl NumberFormat {
    /// French number formatting: `1 234,5`, grouped with a narrow no-break space.
    pub const FRENCH: Self = Self {
        decimal_separator: ',',
        group_separator: '\u{202f}',
        max_fraction_digits: 3,
    };

    /// English number formatting: `1,234.5`.
    pub const ENGLISH: Self = Self {
        decimal_separator: '.',
        group_separator: ',',
        max_fraction_digits: 3,
    };

    /// Write `value` with the separators of this format.
    ///
    /// The value is rounded to `max_fraction_digits`, half away from zero.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".into();
        }
        if value.is_infinite() {
            return String::from(if value < 0. { "-∞" } else { "∞" });
        }

        let rounded = round_to(value, self.max_fraction_digits);
        let digits = usize::from(self.max_fraction_digits);
        let plain = format!("{:.digits$}", rounded.abs());
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut text = String::with_capacity(plain.len() + 4);
        if rounded < 0. && (int_part != "0" || !frac_part.is_empty()) {
            text.push('-');
        }
        text.push_str(&group_digits(int_part, self.group_separator));
        if !frac_part.is_empty() {
            text.push(self.decimal_separator);
            text.push_str(frac_part);
        }
        text
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::FRENCH
    }
}

/// Round `value` to `decimals` fractional digits, half away from zero.
#[must_use]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10_f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}

/// Round `value` to `decimals` fractional digits and write it in French.
#[must_use]
pub fn format_number(value: f64, decimals: u8) -> String {
    NumberFormat::FRENCH.format(round_to(value, decimals))
}
