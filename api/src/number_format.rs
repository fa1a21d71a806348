//! Display formatting for market figures.
//!
//! The grouping formatter follows the browser's default `Intl.NumberFormat`
//! behaviour: up to three fraction digits, trailing zeros dropped, integer digits
//! grouped in threes. Percent changes are locale independent and always carry
//! exactly two decimals.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::Deserialize;
use serde::Serialize;

/// Separator conventions used by [`format_grouped`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum NumberLocale {
    #[default]
    #[strum(to_string = "en-US", serialize = "en_US", serialize = "en")]
    EnUs,
    #[strum(to_string = "de-DE", serialize = "de_DE", serialize = "de")]
    DeDe,
    #[strum(to_string = "fr-FR", serialize = "fr_FR", serialize = "fr")]
    FrFr,
    #[strum(to_string = "de-CH", serialize = "de_CH")]
    DeCh,
}

impl NumberLocale {
    pub fn group_separator(&self) -> &'static str {
        match self {
            Self::EnUs => ",",
            Self::DeDe => ".",
            Self::FrFr => "\u{202f}",
            Self::DeCh => "’",
        }
    }

    pub fn decimal_separator(&self) -> &'static str {
        match self {
            Self::EnUs | Self::DeCh => ".",
            Self::DeDe | Self::FrFr => ",",
        }
    }

    /// The BCP 47 tag, e.g. `"en-US"`.
    pub fn tag(&self) -> &'static str {
        self.into()
    }
}

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a value with thousands grouping, e.g. `1234.5` -> `"1,234.5"` in `en-US`.
pub fn format_grouped(value: f64, locale: NumberLocale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let fixed = fixed_magnitude(value, MAX_FRACTION_DIGITS);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    // -0.0001 rounds to 0 and must not print as "-0"
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    push_grouped(&mut out, int_part, locale.group_separator());
    if !frac_part.is_empty() {
        out.push_str(locale.decimal_separator());
        out.push_str(frac_part);
    }
    out
}

fn push_grouped(out: &mut String, digits: &str, separator: &str) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
}

/// Formats a 24h change as a percentage with two decimals, e.g. `-3.456` -> `"-3.46%"`.
pub fn format_percent_change(value: f64) -> String {
    if value.is_nan() {
        return "NaN%".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity%" } else { "Infinity%" }.to_string();
    }
    if value == 0.0 {
        // also catches -0.0, which `{:.2}` would print with a sign
        return "0.00%".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}%", fixed_magnitude(value, 2))
}

/// `|value|` with exactly `digits` fraction digits, ties rounded away from zero
/// like `Number.prototype.toFixed`.
///
/// Rounds the exact binary value, so `1.005` (really `1.00499...`) still gives `1.00`.
fn fixed_magnitude(value: f64, digits: usize) -> String {
    match Decimal::from_f64_retain(value.abs()) {
        Some(d) => {
            let rounded =
                d.round_dp_with_strategy(digits as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.digits$}")
        }
        // beyond Decimal's range every digit is integral, so there is no tie to break
        None => format!("{:.*}", digits, value.abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(1234.5, NumberLocale::EnUs), "1,234.5");
        assert_eq!(format_grouped(1234567890123.0, NumberLocale::EnUs), "1,234,567,890,123");
        assert_eq!(format_grouped(999.0, NumberLocale::EnUs), "999");
        assert_eq!(format_grouped(1000.0, NumberLocale::EnUs), "1,000");
        assert_eq!(format_grouped(0.0, NumberLocale::EnUs), "0");
    }

    #[test]
    fn keeps_at_most_three_fraction_digits() {
        assert_eq!(format_grouped(62831.8530, NumberLocale::EnUs), "62,831.853");
        assert_eq!(format_grouped(0.123456, NumberLocale::EnUs), "0.123");
        assert_eq!(format_grouped(1.9999, NumberLocale::EnUs), "2");
        assert_eq!(format_grouped(0.00001, NumberLocale::EnUs), "0");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_grouped(1.0625, NumberLocale::EnUs), "1.063");
        assert_eq!(format_grouped(-1.0625, NumberLocale::EnUs), "-1.063");
        assert_eq!(format_grouped(2.0005, NumberLocale::EnUs), "2");
        assert_eq!(format_grouped(1234.0625, NumberLocale::DeDe), "1.234,063");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_grouped(-98765.4321, NumberLocale::EnUs), "-98,765.432");
        assert_eq!(format_grouped(-0.0001, NumberLocale::EnUs), "0");
        assert_eq!(format_grouped(-0.0, NumberLocale::EnUs), "0");
    }

    #[test]
    fn uses_locale_separators() {
        assert_eq!(format_grouped(1234567.25, NumberLocale::DeDe), "1.234.567,25");
        assert_eq!(format_grouped(1234567.25, NumberLocale::FrFr), "1\u{202f}234\u{202f}567,25");
        assert_eq!(format_grouped(1234567.25, NumberLocale::DeCh), "1’234’567.25");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_grouped(f64::NAN, NumberLocale::EnUs), "NaN");
        assert_eq!(format_grouped(f64::INFINITY, NumberLocale::EnUs), "∞");
        assert_eq!(format_grouped(f64::NEG_INFINITY, NumberLocale::EnUs), "-∞");
    }

    #[test]
    fn percent_change_has_two_decimals() {
        assert_eq!(format_percent_change(-3.456), "-3.46%");
        assert_eq!(format_percent_change(2.0), "2.00%");
        assert_eq!(format_percent_change(12.344), "12.34%");
        assert_eq!(format_percent_change(0.0), "0.00%");
        assert_eq!(format_percent_change(-0.0), "0.00%");
        assert_eq!(format_percent_change(f64::NAN), "NaN%");
    }

    #[test]
    fn percent_change_ties_round_away_from_zero() {
        assert_eq!(format_percent_change(0.125), "0.13%");
        assert_eq!(format_percent_change(-0.125), "-0.13%");
        assert_eq!(format_percent_change(2.375), "2.38%");
        // 1.005 is stored as 1.00499..., so it is not a tie
        assert_eq!(format_percent_change(1.005), "1.00%");
        assert_eq!(format_percent_change(-0.001), "-0.00%");
    }

    #[test]
    fn locale_parses_from_tags() {
        assert_eq!(NumberLocale::from_str("en-US").unwrap(), NumberLocale::EnUs);
        assert_eq!(NumberLocale::from_str("DE-de").unwrap(), NumberLocale::DeDe);
        assert_eq!(NumberLocale::from_str("fr").unwrap(), NumberLocale::FrFr);
        assert!(NumberLocale::from_str("xx-YY").is_err());
        assert_eq!(NumberLocale::DeCh.tag(), "de-CH");
    }
}
