//! Error records and caller errors.
//!
//! Two different things live here:
//!
//! - [`L10nError`]: a localization defect found on a page. These are data,
//!   appended to a caller-owned collection and handed to whatever reports them.
//! - [`Error`]: misuse of the library itself (unknown language code, a broken
//!   decision table). These are returned as `Err`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error-type tags understood by the severity table.
pub mod error_type {
    pub const CURRENCY_MISMATCH: &str = "CURRENCY_MISMATCH";
    pub const CRITICAL_TEXT_MISSING: &str = "CRITICAL_TEXT_MISSING";
    pub const DATE_FORMAT: &str = "DATE_FORMAT";
    pub const TEXT_OVERFLOW: &str = "TEXT_OVERFLOW";
    pub const UNTRANSLATED_TEXT: &str = "UNTRANSLATED_TEXT";
    pub const KEYWORD_MISSING: &str = "KEYWORD_MISSING";
    pub const FORMAT_WARNING: &str = "FORMAT_WARNING";
    /// Not in the severity table; always LOW.
    pub const TEXT_LENGTH: &str = "TEXT_LENGTH";
    /// Prices use the other decimal convention. LOW.
    pub const DECIMAL_SEPARATOR: &str = "DECIMAL_SEPARATOR";
    /// Page direction disagrees with the language. LOW.
    pub const RTL: &str = "RTL";
    /// Too much English across sampled page texts. LOW.
    pub const UNTRANSLATED: &str = "UNTRANSLATED";
}

/// Library errors: caller mistakes and malformed decision tables.
#[derive(Debug, Error)]
pub enum Error {
    /// The language code has no row in the decision table.
    /// Callers are expected to check `is_supported` first.
    #[error("Unsupported language code: '{0}'")]
    UnsupportedLanguage(String),

    #[error("Duplicate language code in decision table: '{0}'")]
    DuplicateLanguage(String),

    #[error("Invalid decision table entry '{code}': {reason}")]
    InvalidEntry { code: String, reason: String },

    #[error("Decision table JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// How bad a localization defect is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Fixed type → severity table. Unknown tags are LOW.
    pub fn for_error_type(error_type: &str) -> Severity {
        match error_type {
            error_type::CURRENCY_MISMATCH | error_type::CRITICAL_TEXT_MISSING => Severity::Critical,
            error_type::DATE_FORMAT | error_type::TEXT_OVERFLOW | error_type::UNTRANSLATED_TEXT => {
                Severity::High
            }
            error_type::KEYWORD_MISSING | error_type::FORMAT_WARNING => Severity::Medium,
            _ => Severity::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A localization defect detected on a page.
///
/// Severity is derived from the type tag at construction and cannot be
/// changed afterwards. The only mutable part is the screenshot reference,
/// which a capture step may attach later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "L10nErrorRecord")]
pub struct L10nError {
    #[serde(rename = "type")]
    error_type: String,
    title: String,
    description: String,
    page_url: String,
    severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    screenshot_path: Option<PathBuf>,
}

impl L10nError {
    pub fn new(
        error_type: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        page_url: impl Into<String>,
    ) -> Self {
        let error_type = error_type.into();
        let severity = Severity::for_error_type(&error_type);
        Self {
            error_type,
            title: title.into(),
            description: description.into(),
            page_url: page_url.into(),
            severity,
            language_code: None,
            timestamp: None,
            screenshot_path: None,
        }
    }

    /// Tag the error with the language under test and the current time.
    pub fn for_language(self, language_code: impl Into<String>) -> Self {
        self.for_language_at(language_code, Utc::now())
    }

    /// Same as [`for_language`](Self::for_language) with an explicit timestamp.
    pub fn for_language_at(mut self, language_code: impl Into<String>, at: DateTime<Utc>) -> Self {
        self.language_code = Some(language_code.into());
        self.timestamp = Some(at);
        self
    }

    /// Attach the path of a screenshot taken when the error was recorded.
    pub fn attach_screenshot(&mut self, path: impl Into<PathBuf>) {
        self.screenshot_path = Some(path.into());
    }

    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn screenshot_path(&self) -> Option<&Path> {
        self.screenshot_path.as_deref()
    }
}

/// Wire form of an [`L10nError`]. A stored severity is optional and must
/// agree with the one derived from the type tag.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct L10nErrorRecord {
    #[serde(rename = "type")]
    error_type: String,
    title: String,
    description: String,
    page_url: String,
    severity: Option<Severity>,
    language_code: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    screenshot_path: Option<PathBuf>,
}

impl TryFrom<L10nErrorRecord> for L10nError {
    type Error = String;

    fn try_from(record: L10nErrorRecord) -> std::result::Result<Self, String> {
        let mut error = L10nError::new(
            record.error_type,
            record.title,
            record.description,
            record.page_url,
        );

        if let Some(stored) = record.severity {
            if stored != error.severity {
                return Err(format!(
                    "severity {} does not match type {} (expected {})",
                    stored, error.error_type, error.severity
                ));
            }
        }

        error.language_code = record.language_code;
        error.timestamp = record.timestamp;
        error.screenshot_path = record.screenshot_path;
        Ok(error)
    }
}

impl fmt::Display for L10nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} (URL: {})",
            self.error_type, self.title, self.description, self.page_url
        )
    }
}
