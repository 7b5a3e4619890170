//! Date format detection, locale validation and conversion.

use crate::checks::CheckIssue;
use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateFormat {
    /// 2024-01-15
    Iso,
    /// 15/01/2024
    Dmy,
    /// 01/15/2024
    Mdy,
    /// 15 Jan 2024, Jan 15, 2024
    MonthName,
    /// 05/06/2024: either day or month could come first
    Ambiguous,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateFormat::Iso => "ISO",
            DateFormat::Dmy => "DMY",
            DateFormat::Mdy => "MDY",
            DateFormat::MonthName => "MONTH_NAME",
            DateFormat::Ambiguous => "AMBIGUOUS",
        };
        f.write_str(name)
    }
}

/// Outcome of [`validate_date`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateCheckResult {
    pub original_text: String,
    pub detected_format: Option<DateFormat>,
    pub is_valid: bool,
    pub has_english_month: bool,
    pub error: Option<CheckIssue>,
    pub warning: Option<CheckIssue>,
}

impl DateCheckResult {
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn warning_message(&self) -> Option<String> {
        self.warning.as_ref().map(ToString::to_string)
    }
}

/// Full names first so the longest name is reported.
const ENGLISH_MONTHS: [&str; 24] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug",
    "Sep", "Oct", "Nov", "Dec",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const NUMERIC_DATE: &str = r"\b(?P<a>\d{1,4})[/.\-](?P<b>\d{1,2})[/.\-](?P<c>\d{1,4})\b";
const DAY_MONTH_NAME: &str = r"\b(?P<dd>\d{1,2})\s+(?P<dmon>Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+(?P<dyear>\d{2,4})\b";
const MONTH_NAME_DAY: &str = r"\b(?P<mmon>Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+(?P<mday>\d{1,2}),?\s+(?P<myear>\d{2,4})\b";

static NUMERIC_REGEX: OnceLock<Regex> = OnceLock::new();
static MONTH_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static ANY_DATE_REGEX: OnceLock<Regex> = OnceLock::new();

fn numeric_regex() -> &'static Regex {
    NUMERIC_REGEX.get_or_init(|| Regex::new(NUMERIC_DATE).unwrap())
}

fn month_name_regex() -> &'static Regex {
    MONTH_NAME_REGEX
        .get_or_init(|| Regex::new(&format!("{}|{}", DAY_MONTH_NAME, MONTH_NAME_DAY)).unwrap())
}

fn any_date_regex() -> &'static Regex {
    ANY_DATE_REGEX.get_or_init(|| {
        Regex::new(&format!("{}|{}|{}", NUMERIC_DATE, DAY_MONTH_NAME, MONTH_NAME_DAY)).unwrap()
    })
}

/// Classify the first date found in `text`.
///
/// Numeric dates with a four-digit leading group are ISO. With a
/// four-digit trailing year the first two groups decide: a second value
/// above 12 means month first, a first value in 13..=31 means day first,
/// both at most 12 is ambiguous, anything else defaults to day first.
/// Otherwise an English month-name date is `MonthName`.
///
/// # Returns
/// `None` when no date is found. A numeric date whose first two groups
/// both fit a month is `Some(DateFormat::Ambiguous)`.
pub fn detect_date_format(text: &str) -> Option<DateFormat> {
    if let Some(caps) = numeric_regex().captures(text) {
        let (first, second, third) = (&caps["a"], &caps["b"], &caps["c"]);

        if first.len() == 4 {
            return Some(DateFormat::Iso);
        }

        if third.len() == 4 {
            let first: u32 = first.parse().ok()?;
            let second: u32 = second.parse().ok()?;

            let format = if first <= 12 && second > 12 {
                DateFormat::Mdy
            } else if first > 12 && first <= 31 {
                DateFormat::Dmy
            } else if first <= 12 && second <= 12 {
                DateFormat::Ambiguous
            } else {
                DateFormat::Dmy
            };
            return Some(format);
        }
    }

    if month_name_regex().is_match(text) {
        return Some(DateFormat::MonthName);
    }

    None
}

/// First English month name (full or abbreviated) contained in `text`.
pub fn find_english_month(text: &str) -> Option<&'static str> {
    ENGLISH_MONTHS
        .iter()
        .copied()
        .find(|month| text.contains(month))
}

pub fn contains_english_month(text: &str) -> bool {
    find_english_month(text).is_some()
}

/// Languages whose storefront uses month-first dates.
pub fn is_us_date_format(language_code: &str) -> bool {
    matches!(language_code, "en" | "mx")
}

/// Validate a date string for a language.
///
/// An English month name outside an English page fails immediately. A
/// month-first date fails for languages that do not use US dates. A date
/// that does not fully match `expected_pattern` stays valid with a warning.
///
/// # Arguments
/// * `text` - The date as displayed
/// * `language_code` - Language of the page
/// * `expected_pattern` - Regular expression the whole date should match, if any
///
/// # Returns
/// A `DateCheckResult` with the detected format and at most one error or
/// warning.
pub fn validate_date(
    text: &str,
    language_code: &str,
    expected_pattern: Option<&str>,
) -> DateCheckResult {
    let mut result = DateCheckResult {
        original_text: text.to_string(),
        detected_format: None,
        is_valid: false,
        has_english_month: false,
        error: None,
        warning: None,
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        result.error = Some(CheckIssue::InputEmpty);
        return result;
    }

    result.detected_format = detect_date_format(trimmed);

    let english_month = find_english_month(trimmed);
    result.has_english_month = english_month.is_some();

    if let Some(month) = english_month {
        if language_code != "en" {
            result.error = Some(CheckIssue::EnglishMonthInNonEnglish {
                month: month.to_string(),
                language: language_code.to_string(),
            });
            return result;
        }
    }

    if result.detected_format == Some(DateFormat::Mdy) && !is_us_date_format(language_code) {
        result.error = Some(CheckIssue::UsDateFormatInNonUs {
            text: trimmed.to_string(),
            language: language_code.to_string(),
        });
        return result;
    }

    result.is_valid = true;

    if let Some(pattern) = expected_pattern {
        match Regex::new(&format!("^(?:{})$", pattern)) {
            Ok(regex) if !regex.is_match(trimmed) => {
                result.warning = Some(CheckIssue::DatePatternMismatch {
                    text: trimmed.to_string(),
                    pattern: pattern.to_string(),
                });
            }
            Ok(_) => {}
            Err(_) => {
                result.warning = Some(CheckIssue::InvalidDatePattern {
                    pattern: pattern.to_string(),
                });
            }
        }
    }

    result
}

/// Two-digit years: above 50 is 19xx, otherwise 20xx.
fn expand_year(year: &str) -> Option<i32> {
    let value: i32 = year.parse().ok()?;
    if year.len() <= 2 {
        Some(if value > 50 { 1900 + value } else { 2000 + value })
    } else {
        Some(value)
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?;
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == prefix)
        .map(|index| index as u32 + 1)
}

fn ymd(year: &str, month: u32, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(expand_year(year)?, month, day.parse().ok()?)
}

fn numeric_parts(text: &str) -> Option<Captures<'_>> {
    numeric_regex().captures(text)
}

/// Parse the first date in `text` read as `format`.
///
/// `None` when nothing matches, the format is ambiguous, or the fields do
/// not form a real calendar date.
pub fn parse_date(text: &str, format: DateFormat) -> Option<NaiveDate> {
    match format {
        DateFormat::Iso => {
            let caps = numeric_parts(text)?;
            ymd(&caps["a"], caps["b"].parse().ok()?, &caps["c"])
        }
        DateFormat::Dmy => {
            let caps = numeric_parts(text)?;
            ymd(&caps["c"], caps["b"].parse().ok()?, &caps["a"])
        }
        DateFormat::Mdy => {
            let caps = numeric_parts(text)?;
            ymd(&caps["c"], caps["a"].parse().ok()?, &caps["b"])
        }
        DateFormat::MonthName => {
            let caps = month_name_regex().captures(text)?;
            if let Some(day) = caps.name("dd") {
                ymd(&caps["dyear"], month_from_name(&caps["dmon"])?, day.as_str())
            } else {
                ymd(&caps["myear"], month_from_name(&caps["mmon"])?, &caps["mday"])
            }
        }
        DateFormat::Ambiguous => None,
    }
}

/// Re-render a date in another numeric layout, zero-padded, joined with
/// `separator`. Only ISO, DMY and MDY are valid targets.
pub fn convert_date_format(
    text: &str,
    from: DateFormat,
    to: DateFormat,
    separator: &str,
) -> Option<String> {
    let date = parse_date(text, from)?;
    let (year, month, day) = (date.year(), date.month(), date.day());

    match to {
        DateFormat::Iso => Some(format!(
            "{:04}{sep}{:02}{sep}{:02}",
            year,
            month,
            day,
            sep = separator
        )),
        DateFormat::Dmy => Some(format!(
            "{:02}{sep}{:02}{sep}{:04}",
            day,
            month,
            year,
            sep = separator
        )),
        DateFormat::Mdy => Some(format!(
            "{:02}{sep}{:02}{sep}{:04}",
            month,
            day,
            year,
            sep = separator
        )),
        DateFormat::MonthName | DateFormat::Ambiguous => None,
    }
}

/// Every date-looking substring, in order. Duplicates are kept.
pub fn extract_dates(text: &str) -> Vec<String> {
    any_date_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
