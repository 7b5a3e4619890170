//! Property-based invariant tests for the checkers and the decision table.
//!
//! 1. Price format conversion is its own inverse
//! 2. A valid currency result always carries a symbol and an amount
//! 3. Text length status follows the language's thresholds exactly
//! 4. Overflow is never reported within the 5px tolerance
//! 5. Unambiguous numeric dates are classified and round-trip through ISO
//! 6. Keyword coverage stays in [0, 1]
//! 7. Derived table fields are pure functions of code and decimal separator

use chrono::{Datelike, NaiveDate};
use l10n_check::checks::currency::{convert_price_format, validate_currency};
use l10n_check::checks::date::{convert_date_format, detect_date_format, parse_date, DateFormat};
use l10n_check::checks::text::{
    calculate_keyword_coverage, check_expected_keywords, check_text_length, check_text_overflow,
    length_thresholds, TextLengthStatus,
};
use l10n_check::locale::{
    decimal_separator_type, is_rtl_language, test_group, LanguageConfig, LanguageSpec,
};
use l10n_check::{LanguageTable, Severity};
use proptest::prelude::*;

// ==================== Helpers ====================

fn builtin_codes() -> Vec<String> {
    LanguageTable::builtin()
        .supported_codes()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn any_code() -> impl Strategy<Value = String> {
    prop::sample::select(builtin_codes())
}

// ==================== 1. Price conversion ====================

proptest! {
    #[test]
    fn price_conversion_round_trips(text in "[0-9., €$]{0,24}") {
        let there = convert_price_format(&text, ".", ",");
        let back = convert_price_format(&there, ",", ".");
        prop_assert_eq!(back, text);
    }

    #[test]
    fn price_conversion_identity_for_same_separator(text in "\\PC{0,24}") {
        prop_assert_eq!(convert_price_format(&text, ",", ","), text);
    }
}

// ==================== 2. Currency results ====================

proptest! {
    #[test]
    fn valid_currency_has_symbol_and_amount(text in "\\PC{0,30}", code in any_code()) {
        let table = LanguageTable::builtin();
        let config = table.get(&code).unwrap();
        let result = validate_currency(&text, config);

        if result.is_valid {
            prop_assert!(result.detected_symbol.is_some());
            prop_assert!(result.numeric_value.is_some());
            prop_assert!(result.error.is_none());
        } else {
            prop_assert!(result.error.is_some());
            prop_assert!(result.warning.is_none());
        }
    }

    #[test]
    fn grouped_amounts_parse_in_their_convention(units in 0u32..1000, thousands in 1u32..1000, cents in 0u32..100) {
        let table = LanguageTable::builtin();
        let expected = f64::from(thousands) * 1000.0 + f64::from(units) + f64::from(cents) / 100.0;

        let fr = format!("{} {:03},{:02} €", thousands, units, cents);
        let value = validate_currency(&fr, table.get("fr").unwrap()).numeric_value.unwrap();
        prop_assert!((value - expected).abs() < 1e-6);

        let en = format!("${},{:03}.{:02}", thousands, units, cents);
        let value = validate_currency(&en, table.get("en").unwrap()).numeric_value.unwrap();
        prop_assert!((value - expected).abs() < 1e-6);
    }
}

// ==================== 3. Text length ====================

proptest! {
    #[test]
    fn length_status_matches_thresholds(len in 0usize..200, code in any_code()) {
        let text = "ä".repeat(len);
        let result = check_text_length(&text, &code);
        let (warning, error) = length_thresholds(&code);

        prop_assert_eq!(result.length, len);
        let expected = if len == 0 {
            TextLengthStatus::Empty
        } else if len > error {
            TextLengthStatus::TooLong
        } else if len > warning {
            TextLengthStatus::Warning
        } else {
            TextLengthStatus::Ok
        };
        prop_assert_eq!(result.status, expected);
    }

    #[test]
    fn thresholds_never_below_defaults(code in "[a-z]{2}") {
        let (warning, error) = length_thresholds(&code);
        prop_assert!(warning >= 50);
        prop_assert!(error >= 80);
        prop_assert!(warning < error);
    }
}

// ==================== 4. Overflow ====================

proptest! {
    #[test]
    fn overflow_respects_tolerance(offset in any::<u32>(), scroll in any::<u32>()) {
        let result = check_text_overflow(".btn", "Warenkorb", offset, scroll);

        if result.is_overflowing {
            prop_assert!(u64::from(scroll) > u64::from(offset) + 5);
            prop_assert!(result.overflow_ratio > 1.0);
        }
        if offset == 0 {
            prop_assert_eq!(result.overflow_ratio, 0.0);
            prop_assert!(!result.is_overflowing);
        }
    }

    #[test]
    fn clear_overflow_is_detected(offset in 1u32..10_000, extra in 6u32..10_000) {
        let result = check_text_overflow(".btn", "Warenkorb", offset, offset + extra);
        prop_assert!(result.is_overflowing);
    }
}

// ==================== 5. Dates ====================

proptest! {
    #[test]
    fn day_first_dates_are_dmy(day in 13u32..=28, month in 1u32..=12, year in 1900i32..2100) {
        let text = format!("{:02}/{:02}/{}", day, month, year);
        prop_assert_eq!(detect_date_format(&text), Some(DateFormat::Dmy));
    }

    #[test]
    fn month_first_dates_are_mdy(day in 13u32..=28, month in 1u32..=12, year in 1900i32..2100) {
        let text = format!("{:02}/{:02}/{}", month, day, year);
        prop_assert_eq!(detect_date_format(&text), Some(DateFormat::Mdy));
    }

    #[test]
    fn dmy_round_trips_through_iso(day in 1u32..=28, month in 1u32..=12, year in 1000i32..10_000) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let dmy = format!("{:02}.{:02}.{}", day, month, year);

        let iso = convert_date_format(&dmy, DateFormat::Dmy, DateFormat::Iso, "-").unwrap();
        prop_assert_eq!(parse_date(&iso, DateFormat::Iso), Some(date));

        let back = convert_date_format(&iso, DateFormat::Iso, DateFormat::Dmy, ".").unwrap();
        prop_assert_eq!(back, dmy);
    }

    #[test]
    fn two_digit_years_land_in_window(yy in 0i32..100) {
        let date = parse_date(&format!("15/01/{:02}", yy), DateFormat::Dmy).unwrap();
        prop_assert!((1951..=2050).contains(&date.year()));
    }
}

// ==================== 6. Keyword coverage ====================

proptest! {
    #[test]
    fn coverage_in_unit_interval(text in "\\PC{0,40}", keywords in prop::collection::vec("[a-zA-Z]{1,6}", 0..8)) {
        let results = check_expected_keywords(&text, &keywords);
        let coverage = calculate_keyword_coverage(&results);
        prop_assert!((0.0..=1.0).contains(&coverage));
        prop_assert!(results.len() <= keywords.len());
    }
}

// ==================== 7. Derivation ====================

proptest! {
    #[test]
    fn derived_fields_follow_code_and_separator(
        code in prop_oneof![any_code(), "[a-z]{2}"],
        decimal in prop::sample::select(vec![".", ",", "٫"]),
    ) {
        let config = LanguageConfig::new(LanguageSpec {
            code: code.clone(),
            language_name: "Test".to_string(),
            primary_currency: "€".to_string(),
            secondary_currency: "€".to_string(),
            default_currency: None,
            date_pattern: String::new(),
            decimal_separator: decimal.to_string(),
            thousand_separator: " ".to_string(),
            expected_keywords: Vec::new(),
        });

        let is_rtl = is_rtl_language(&code);
        let decimal_type = decimal_separator_type(decimal);
        prop_assert_eq!(config.is_rtl(), is_rtl);
        prop_assert_eq!(config.decimal_separator_type(), decimal_type);
        prop_assert_eq!(config.test_group(), test_group(&code, is_rtl, decimal_type));

        let json = serde_json::to_string(&config).unwrap();
        let restored: LanguageConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, config);
    }

    #[test]
    fn unknown_error_types_are_low(tag in "[a-z_]{1,20}") {
        prop_assert_eq!(Severity::for_error_type(&tag), Severity::Low);
    }
}
