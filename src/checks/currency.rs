//! Currency and numeric format checks.

use crate::checks::CheckIssue;
use crate::locale::{DecimalSeparatorType, LanguageConfig};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Currency tokens scanned in order; the first substring hit wins.
///
/// Order matters for overlapping tokens. "$" comes before "R$" and "NT$",
/// so "NT$ 100" is reported as "$".
pub const CURRENCY_SYMBOLS: &[&str] = &[
    "€", "$", "£", "¥", "₩", "₫", "฿", "₹", "₽", "₴", "₺", "₪", "৳", "﷼", "zł", "Kč", "kr", "лв",
    "грн", "руб", "ден", "Ft", "R$", "NT$", "Rp", "KM", "lei", "CHF",
];

/// Currency accepted on every storefront regardless of language.
pub const PLATFORM_DEFAULT_CURRENCY: &str = "€";

/// Outcome of [`validate_currency`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyCheckResult {
    pub original_text: String,
    pub detected_symbol: Option<String>,
    pub numeric_value: Option<f64>,
    pub is_valid: bool,
    pub error: Option<CheckIssue>,
    pub warning: Option<CheckIssue>,
}

impl CurrencyCheckResult {
    fn new(text: &str) -> Self {
        Self {
            original_text: text.to_string(),
            detected_symbol: None,
            numeric_value: None,
            is_valid: false,
            error: None,
            warning: None,
        }
    }

    fn fail(mut self, issue: CheckIssue) -> Self {
        self.is_valid = false;
        self.error = Some(issue);
        self
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn warning_message(&self) -> Option<String> {
        self.warning.as_ref().map(ToString::to_string)
    }
}

static DOT_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static COMMA_NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

/// First currency token contained in `text`.
pub fn detect_currency_symbol(text: &str) -> Option<&'static str> {
    CURRENCY_SYMBOLS
        .iter()
        .copied()
        .find(|symbol| text.contains(symbol))
}

/// A price needs a currency token and at least one digit.
pub fn is_valid_price_format(text: &str) -> bool {
    detect_currency_symbol(text).is_some() && has_digit(text)
}

fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Pull the amount out of a price string.
///
/// With a comma decimal separator, dots are grouping and the comma becomes
/// the decimal point; otherwise commas are grouping. Spaces are treated as
/// grouping in both cases.
pub fn extract_numeric_value(text: &str, decimal_separator: &str) -> Result<f64, CheckIssue> {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | ' '))
        .collect();

    if !has_digit(&kept) {
        return Err(CheckIssue::NumberNotFound {
            text: text.to_string(),
        });
    }

    let normalized: String = if decimal_separator == "," {
        kept.chars()
            .filter(|c| *c != '.' && *c != ' ')
            .map(|c| if c == ',' { '.' } else { c })
            .collect()
    } else {
        kept.chars().filter(|c| *c != ',' && *c != ' ').collect()
    };

    normalized
        .parse::<f64>()
        .map_err(|_| CheckIssue::NumberParseFailure {
            text: text.to_string(),
        })
}

/// Validate a price string against a language's expectations.
///
/// Checks run in order and stop at the first failure: empty input, missing
/// symbol, missing digits, unparsable amount. A symbol outside the
/// language's accepted currencies (and the platform default) only yields a
/// warning.
///
/// # Arguments
/// * `text` - The price as displayed, e.g. `"1 299,00 €"`
/// * `config` - Decision-table row of the page's language
///
/// # Returns
/// A `CurrencyCheckResult` with the detected symbol, the parsed amount and
/// at most one error or warning.
pub fn validate_currency(text: &str, config: &LanguageConfig) -> CurrencyCheckResult {
    let mut result = CurrencyCheckResult::new(text);

    if text.trim().is_empty() {
        return result.fail(CheckIssue::InputEmpty);
    }

    let Some(symbol) = detect_currency_symbol(text) else {
        return result.fail(CheckIssue::SymbolNotFound {
            text: text.to_string(),
        });
    };
    result.detected_symbol = Some(symbol.to_string());

    if !has_digit(text) {
        return result.fail(CheckIssue::NumberNotFound {
            text: text.to_string(),
        });
    }

    match extract_numeric_value(text, config.decimal_separator()) {
        Ok(value) => result.numeric_value = Some(value),
        Err(issue) => return result.fail(issue),
    }

    result.is_valid = true;

    let expected = config
        .accepted_currencies()
        .chain(std::iter::once(PLATFORM_DEFAULT_CURRENCY))
        .any(|currency| currency == symbol);
    if !expected {
        result.warning = Some(CheckIssue::CurrencyMismatch {
            symbol: symbol.to_string(),
            language: config.code().to_string(),
        });
    }

    result
}

/// Shape check for a bare number in the given decimal convention.
///
/// `Dot`: `1,234.56`, `1234.56`. `Comma`: `1.234,56`, `1 234,56`, `1234,56`.
pub fn validate_number_format(text: &str, decimal_type: DecimalSeparatorType) -> bool {
    let text = text.trim();
    let regex = match decimal_type {
        DecimalSeparatorType::Dot => DOT_NUMBER_REGEX
            .get_or_init(|| Regex::new(r"^(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?$").unwrap()),
        DecimalSeparatorType::Comma => COMMA_NUMBER_REGEX
            .get_or_init(|| Regex::new(r"^(?:\d{1,3}(?:[. ]\d{3})+|\d+)(?:,\d+)?$").unwrap()),
    };
    regex.is_match(text)
}

/// Swap the decimal separator `from` for `to`, moving the other one into the
/// grouping position.
///
/// Works in a single left-to-right pass, so no substituted text is ever
/// rescanned. Identity when both are the same or either is empty.
///
/// # Arguments
/// * `text` - Price text, e.g. `"1.234,56 €"`
/// * `from` - Decimal separator currently used by `text`
/// * `to` - Decimal separator wanted
///
/// # Returns
/// The converted text; characters other than the two separators are kept.
pub fn convert_price_format(text: &str, from: &str, to: &str) -> String {
    if from == to || from.is_empty() || to.is_empty() {
        return text.to_string();
    }

    let mut converted = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix(from) {
            converted.push_str(to);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(to) {
            converted.push_str(from);
            rest = after;
        } else {
            converted.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    converted
}

static DECIMAL_PART_REGEX: OnceLock<Regex> = OnceLock::new();

/// Count of prices using each decimal convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeparatorUsage {
    pub dot: usize,
    pub comma: usize,
}

impl SeparatorUsage {
    /// The separator used by more prices. `None` on a tie, including when no
    /// price shows a decimal part.
    pub fn dominant(&self) -> Option<&'static str> {
        match self.dot.cmp(&self.comma) {
            std::cmp::Ordering::Greater => Some("."),
            std::cmp::Ordering::Less => Some(","),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Decimal separator of one price: the last `.` or `,` followed by exactly
/// two digits. `"1,234.56 €"` gives `"."`, `"1.234 Ft"` gives `None`.
pub fn decimal_separator_of(price: &str) -> Option<&'static str> {
    let regex = DECIMAL_PART_REGEX.get_or_init(|| Regex::new(r"\d([.,])\d{2}(?:\D|$)").unwrap());
    regex
        .captures_iter(price)
        .last()
        .map(|caps| if &caps[1] == "." { "." } else { "," })
}

/// Tally the decimal separators used across a page's prices.
///
/// Prices without a two-digit decimal part are not counted.
pub fn separator_usage<S: AsRef<str>>(prices: &[S]) -> SeparatorUsage {
    let mut usage = SeparatorUsage::default();
    for price in prices {
        match decimal_separator_of(price.as_ref()) {
            Some(".") => usage.dot += 1,
            Some(_) => usage.comma += 1,
            None => {}
        }
    }
    usage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LanguageTable;

    fn config(code: &str) -> LanguageConfig {
        LanguageTable::builtin()
            .get(code)
            .expect("builtin language")
            .clone()
    }

    // ==================== Symbol Detection Tests ====================

    #[test]
    fn test_detect_euro() {
        assert_eq!(detect_currency_symbol("10,00 €"), Some("€"));
    }

    #[test]
    fn test_detect_dollar() {
        assert_eq!(detect_currency_symbol("$9.99"), Some("$"));
    }

    #[test]
    fn test_detect_yen_and_dong() {
        assert_eq!(detect_currency_symbol("¥1000"), Some("¥"));
        assert_eq!(detect_currency_symbol("100.000 ₫"), Some("₫"));
    }

    #[test]
    fn test_detect_multichar_tokens() {
        assert_eq!(detect_currency_symbol("99,99 zł"), Some("zł"));
        assert_eq!(detect_currency_symbol("1 299 Kč"), Some("Kč"));
        assert_eq!(detect_currency_symbol("1.500 Ft"), Some("Ft"));
    }

    #[test]
    fn test_detect_no_symbol() {
        assert_eq!(detect_currency_symbol("100.00"), None);
        assert_eq!(detect_currency_symbol(""), None);
    }

    #[test]
    fn test_detect_dollar_shadows_composite_tokens() {
        assert_eq!(detect_currency_symbol("NT$ 100"), Some("$"));
        assert_eq!(detect_currency_symbol("R$ 49,90"), Some("$"));
    }

    #[test]
    fn test_detect_euro_wins_over_later_tokens() {
        assert_eq!(detect_currency_symbol("12 kr / 1,60 €"), Some("€"));
    }

    // ==================== Price Format Tests ====================

    #[test]
    fn test_valid_price_formats() {
        assert!(is_valid_price_format("10,00 €"));
        assert!(is_valid_price_format("$9.99"));
        assert!(is_valid_price_format("€ 100"));
    }

    #[test]
    fn test_invalid_price_formats() {
        assert!(!is_valid_price_format("€"));
        assert!(!is_valid_price_format("100.00"));
        assert!(!is_valid_price_format(""));
    }

    // ==================== Numeric Extraction Tests ====================

    #[test]
    fn test_extract_us_format() {
        let value = extract_numeric_value("$1,234.56", ".").expect("Should parse");
        assert!((value - 1234.56).abs() < 0.001);
    }

    #[test]
    fn test_extract_eu_format() {
        let value = extract_numeric_value("1.234,56 €", ",").expect("Should parse");
        assert!((value - 1234.56).abs() < 0.001);
    }

    #[test]
    fn test_extract_simple_number() {
        let value = extract_numeric_value("€ 100", ".").expect("Should parse");
        assert!((value - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_extract_space_grouping() {
        let value = extract_numeric_value("1 234,56 €", ",").expect("Should parse");
        assert!((value - 1234.56).abs() < 0.001);
    }

    #[test]
    fn test_extract_no_number() {
        assert_eq!(
            extract_numeric_value("no number", "."),
            Err(CheckIssue::NumberNotFound {
                text: "no number".to_string()
            })
        );
    }

    #[test]
    fn test_extract_malformed_number() {
        let result = extract_numeric_value("1.2.3 €", ".");
        assert!(matches!(result, Err(CheckIssue::NumberParseFailure { .. })));
    }

    // ==================== validate_currency Tests ====================

    #[test]
    fn test_validate_valid_euro_in_french() {
        let result = validate_currency("10,00 €", &config("fr"));
        assert!(result.is_valid);
        assert_eq!(result.detected_symbol.as_deref(), Some("€"));
        assert_eq!(result.numeric_value, Some(10.0));
        assert!(result.error.is_none());
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_validate_valid_dollar_in_english() {
        let result = validate_currency("$9.99", &config("en"));
        assert!(result.is_valid);
        assert_eq!(result.detected_symbol.as_deref(), Some("$"));
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_validate_empty() {
        let result = validate_currency("   ", &config("en"));
        assert!(!result.is_valid);
        assert_eq!(result.error, Some(CheckIssue::InputEmpty));
    }

    #[test]
    fn test_validate_missing_symbol() {
        let result = validate_currency("100.00", &config("en"));
        assert!(!result.is_valid);
        assert!(result.error_message().is_some());
        assert!(matches!(result.error, Some(CheckIssue::SymbolNotFound { .. })));
    }

    #[test]
    fn test_validate_symbol_without_number() {
        let result = validate_currency("€", &config("fr"));
        assert!(!result.is_valid);
        assert_eq!(result.detected_symbol.as_deref(), Some("€"));
        assert!(matches!(result.error, Some(CheckIssue::NumberNotFound { .. })));
    }

    #[test]
    fn test_validate_unparsable_amount() {
        let result = validate_currency("€ 1.2.3", &config("en"));
        assert!(!result.is_valid);
        assert!(matches!(result.error, Some(CheckIssue::NumberParseFailure { .. })));
    }

    #[test]
    fn test_validate_unexpected_symbol_is_warning_only() {
        let result = validate_currency("£12.00", &config("ja"));
        assert!(result.is_valid);
        assert!(result.error.is_none());
        assert_eq!(
            result.warning,
            Some(CheckIssue::CurrencyMismatch {
                symbol: "£".to_string(),
                language: "ja".to_string()
            })
        );
        assert!(result.warning_message().unwrap().contains("£"));
    }

    #[test]
    fn test_validate_platform_default_always_accepted() {
        // English has no default currency; € is still the platform default
        let result = validate_currency("€9.99", &config("en"));
        assert!(result.is_valid);
        assert!(result.warning.is_none());
    }

    #[test]
    fn test_validate_secondary_currency_accepted() {
        let result = validate_currency("99,99 zł", &config("pl"));
        assert!(result.is_valid);
        assert!(result.warning.is_none());
        assert_eq!(result.numeric_value, Some(99.99));
    }

    // ==================== Number Format Tests ====================

    #[test]
    fn test_number_format_dot() {
        assert!(validate_number_format("1,234.56", DecimalSeparatorType::Dot));
        assert!(validate_number_format("1234.56", DecimalSeparatorType::Dot));
        assert!(validate_number_format("12", DecimalSeparatorType::Dot));
        assert!(!validate_number_format("1.234,56", DecimalSeparatorType::Dot));
        assert!(!validate_number_format("12,34", DecimalSeparatorType::Dot));
    }

    #[test]
    fn test_number_format_comma() {
        assert!(validate_number_format("1.234,56", DecimalSeparatorType::Comma));
        assert!(validate_number_format("1 234,56", DecimalSeparatorType::Comma));
        assert!(validate_number_format("1234,56", DecimalSeparatorType::Comma));
        assert!(!validate_number_format("1,234.56", DecimalSeparatorType::Comma));
        assert!(!validate_number_format("", DecimalSeparatorType::Comma));
    }

    // ==================== Conversion Tests ====================

    #[test]
    fn test_convert_eu_to_us() {
        assert_eq!(convert_price_format("1.234,56", ",", "."), "1,234.56");
    }

    #[test]
    fn test_convert_us_to_eu() {
        assert_eq!(convert_price_format("1,234.56", ".", ","), "1.234,56");
    }

    #[test]
    fn test_convert_round_trip() {
        let eu = "12.345.678,90 €";
        let us = convert_price_format(eu, ",", ".");
        assert_eq!(convert_price_format(&us, ".", ","), eu);
    }

    #[test]
    fn test_convert_does_not_rescan_existing_nul() {
        assert_eq!(convert_price_format("1\u{0}234,56", ",", "."), "1\u{0}234.56");
        assert_eq!(convert_price_format("\u{0}1.5", ".", ","), "\u{0}1,5");
    }

    #[test]
    fn test_convert_multichar_separators() {
        assert_eq!(convert_price_format("1'234.50", ".", "'"), "1.234'50");
    }

    #[test]
    fn test_convert_empty_separator_is_identity() {
        assert_eq!(convert_price_format("1.234,56", "", ","), "1.234,56");
    }

    // ==================== Decimal Separator Usage Tests ====================

    #[test]
    fn test_decimal_separator_of() {
        assert_eq!(decimal_separator_of("1,234.56 €"), Some("."));
        assert_eq!(decimal_separator_of("1.234,56 €"), Some(","));
        assert_eq!(decimal_separator_of("29,99"), Some(","));
        assert_eq!(decimal_separator_of("1.234 Ft"), None);
        assert_eq!(decimal_separator_of("12 345 ₫"), None);
        assert_eq!(decimal_separator_of("€"), None);
    }

    #[test]
    fn test_separator_usage_dominant() {
        let usage = separator_usage(&["1,234.56 €", "29.99 €", "10,00 €"]);
        assert_eq!(usage, SeparatorUsage { dot: 2, comma: 1 });
        assert_eq!(usage.dominant(), Some("."));
    }

    #[test]
    fn test_separator_usage_tie_and_empty() {
        assert_eq!(separator_usage(&["1.50 $", "1,50 €"]).dominant(), None);
        assert_eq!(separator_usage::<&str>(&[]).dominant(), None);
        assert_eq!(separator_usage(&["100 ¥"]).dominant(), None);
    }

    #[test]
    fn test_convert_same_separator_is_identity() {
        assert_eq!(convert_price_format("1.234,56", ",", ","), "1.234,56");
    }
}
