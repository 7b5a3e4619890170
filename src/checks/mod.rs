//! Content checkers: currency, date and text.
//!
//! Every function here is pure over its arguments. Bad input is never an
//! `Err`: it comes back as a result record carrying a [`CheckIssue`].
//! Warnings are advisory and never make a result invalid.

pub mod currency;
pub mod date;
pub mod text;

use serde::Serialize;
use thiserror::Error;

/// A validation-level finding attached to a check result.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckIssue {
    #[error("Input text is empty")]
    InputEmpty,

    #[error("No currency symbol found in '{text}'")]
    SymbolNotFound { text: String },

    #[error("No number found in '{text}'")]
    NumberNotFound { text: String },

    #[error("Could not parse a number from '{text}'")]
    NumberParseFailure { text: String },

    #[error("Currency symbol '{symbol}' is not expected for language '{language}'")]
    CurrencyMismatch { symbol: String, language: String },

    #[error("English month name '{month}' in a '{language}' page")]
    #[serde(rename = "ENGLISH_MONTH_IN_NON_EN")]
    EnglishMonthInNonEnglish { month: String, language: String },

    #[error("US date format (MM/DD/YYYY) in '{text}', but '{language}' does not use it")]
    UsDateFormatInNonUs { text: String, language: String },

    #[error("Date '{text}' does not match the expected pattern '{pattern}'")]
    DatePatternMismatch { text: String, pattern: String },

    #[error("Expected date pattern '{pattern}' is not a valid regular expression")]
    InvalidDatePattern { pattern: String },
}

impl CheckIssue {
    /// Stable tag for reports.
    pub fn code(&self) -> &'static str {
        match self {
            CheckIssue::InputEmpty => "INPUT_EMPTY",
            CheckIssue::SymbolNotFound { .. } => "SYMBOL_NOT_FOUND",
            CheckIssue::NumberNotFound { .. } => "NUMBER_NOT_FOUND",
            CheckIssue::NumberParseFailure { .. } => "NUMBER_PARSE_FAILURE",
            CheckIssue::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            CheckIssue::EnglishMonthInNonEnglish { .. } => "ENGLISH_MONTH_IN_NON_EN",
            CheckIssue::UsDateFormatInNonUs { .. } => "US_DATE_FORMAT_IN_NON_US",
            CheckIssue::DatePatternMismatch { .. } => "DATE_PATTERN_MISMATCH",
            CheckIssue::InvalidDatePattern { .. } => "INVALID_DATE_PATTERN",
        }
    }

    /// Advisory findings that leave a result valid.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            CheckIssue::CurrencyMismatch { .. }
                | CheckIssue::DatePatternMismatch { .. }
                | CheckIssue::InvalidDatePattern { .. }
        )
    }
}
