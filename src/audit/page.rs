//! Page-level audit: runs every checker over one page snapshot and turns
//! findings into [`L10nError`] records.

use crate::audit::metrics::AuditMetrics;
use crate::checks::currency::{
    separator_usage, validate_currency, CurrencyCheckResult, SeparatorUsage,
};
use crate::checks::date::{extract_dates, validate_date, DateCheckResult};
use crate::checks::text::{
    analyze_page_language, calculate_keyword_coverage, check_element_overflow,
    check_expected_keywords, check_text_direction, check_text_length,
    find_untranslated_english_text, DirectionCheckResult, ElementMeasurement, LanguageAnalysis,
    TextLengthResult, TextLengthStatus, TextOverflowResult,
};
use crate::error::{error_type, L10nError, Result, Severity};
use crate::locale::LanguageTable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

/// Price strings longer than this are page text, not prices.
pub const DEFAULT_MAX_PRICE_LENGTH: usize = 50;

/// What happens to advisory findings (currency mismatch, date pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningPolicy {
    /// Warnings stay on the result records only.
    #[default]
    Lenient,
    /// Warnings are also appended to the error collection.
    Strict,
}

/// Content extracted from a rendered page by an external driver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub url: String,
    #[serde(default)]
    pub body_text: String,
    #[serde(default)]
    pub prices: Vec<String>,
    #[serde(default)]
    pub elements: Vec<ElementMeasurement>,
    /// Visible texts of headings, links, buttons and labels.
    #[serde(default)]
    pub texts: Vec<String>,
    /// `dir` attribute of the root element.
    #[serde(default)]
    pub html_dir: Option<String>,
    #[serde(default)]
    pub body_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordPresence {
    pub keyword: String,
    pub found: bool,
}

/// Everything the checkers reported for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAudit {
    pub url: String,
    pub language_code: String,
    pub prices: Vec<CurrencyCheckResult>,
    pub decimal_separators: SeparatorUsage,
    pub dates: Vec<DateCheckResult>,
    pub keywords: Vec<KeywordPresence>,
    pub keyword_coverage: f64,
    pub untranslated: Vec<String>,
    pub lengths: Vec<TextLengthResult>,
    pub overflows: Vec<TextOverflowResult>,
    /// `None` when the snapshot carries no `dir` attributes.
    pub direction: Option<DirectionCheckResult>,
    /// `None` when the snapshot carries no element texts.
    pub language: Option<LanguageAnalysis>,
    /// Errors this audit appended to the caller's collection.
    pub errors_recorded: usize,
}

impl PageAudit {
    pub fn invalid_price_count(&self) -> usize {
        self.prices.iter().filter(|r| !r.is_valid).count()
    }

    pub fn invalid_date_count(&self) -> usize {
        self.dates.iter().filter(|r| !r.is_valid).count()
    }

    pub fn missing_keyword_count(&self) -> usize {
        self.keywords.iter().filter(|k| !k.found).count()
    }

    pub fn overflow_count(&self) -> usize {
        self.overflows.iter().filter(|o| o.is_overflowing).count()
    }
}

/// Count errors per severity. Every severity is present, zero or not.
pub fn severity_counts(errors: &[L10nError]) -> BTreeMap<Severity, usize> {
    let mut counts: BTreeMap<Severity, usize> = Severity::ALL.iter().map(|s| (*s, 0)).collect();
    for error in errors {
        *counts.entry(error.severity()).or_insert(0) += 1;
    }
    counts
}

/// Audits page snapshots against a decision table.
pub struct PageAuditor<'a> {
    table: &'a LanguageTable,
    policy: WarningPolicy,
    max_price_length: usize,
    metrics: AuditMetrics,
}

/// Appends errors tagged with the page and language under test.
struct ErrorSink<'e> {
    errors: &'e mut Vec<L10nError>,
    language_code: &'e str,
    url: &'e str,
    recorded: usize,
}

impl ErrorSink<'_> {
    fn push(&mut self, error_type: &str, title: &str, description: String) {
        let error = L10nError::new(error_type, title, description, self.url)
            .for_language(self.language_code);
        debug!(error = %error, severity = %error.severity(), "Recorded l10n error");
        self.errors.push(error);
        self.recorded += 1;
    }
}

impl<'a> PageAuditor<'a> {
    pub fn new(table: &'a LanguageTable, policy: WarningPolicy) -> Self {
        Self {
            table,
            policy,
            max_price_length: DEFAULT_MAX_PRICE_LENGTH,
            metrics: AuditMetrics::new(),
        }
    }

    /// Treat price strings longer than `max_price_length` characters as page text.
    pub fn with_max_price_length(mut self, max_price_length: usize) -> Self {
        self.max_price_length = max_price_length;
        self
    }

    pub fn policy(&self) -> WarningPolicy {
        self.policy
    }

    pub fn metrics(&self) -> &AuditMetrics {
        &self.metrics
    }

    /// Run every check over `snapshot` for `language_code`.
    ///
    /// # Arguments
    /// * `language_code` - Language the page is served in
    /// * `snapshot` - Content extracted from the rendered page
    /// * `errors` - Collection the defects are appended to
    ///
    /// # Returns
    /// A `PageAudit` with every checker result. The only `Err` is an
    /// unknown language code, in which case nothing is appended.
    pub fn audit(
        &self,
        language_code: &str,
        snapshot: &PageSnapshot,
        errors: &mut Vec<L10nError>,
    ) -> Result<PageAudit> {
        let config = self.table.require(language_code)?;
        let strict = self.policy == WarningPolicy::Strict;

        info!(
            language = %language_code,
            url = %snapshot.url,
            prices = snapshot.prices.len(),
            elements = snapshot.elements.len(),
            "Auditing page"
        );

        let mut sink = ErrorSink {
            errors,
            language_code,
            url: &snapshot.url,
            recorded: 0,
        };

        // Prices
        let mut seen_prices = HashSet::new();
        let mut checked_prices = Vec::new();
        let mut prices = Vec::new();
        for raw in &snapshot.prices {
            let price = raw.trim();
            if price.is_empty()
                || price.chars().count() > self.max_price_length
                || !seen_prices.insert(price)
            {
                continue;
            }

            let result = validate_currency(price, config);
            self.metrics
                .record_check(result.is_valid, result.warning.is_some());

            if let Some(issue) = &result.error {
                warn!(price = %price, issue = %issue, "Invalid price");
                sink.push(
                    error_type::FORMAT_WARNING,
                    "Invalid price format",
                    format!("Price '{}': {}", price, issue),
                );
            }
            if let Some(issue) = &result.warning {
                debug!(price = %price, issue = %issue, "Price warning");
                if strict {
                    sink.push(
                        error_type::CURRENCY_MISMATCH,
                        "Unexpected currency",
                        format!("Price '{}': {}", price, issue),
                    );
                }
            }
            checked_prices.push(price);
            prices.push(result);
        }

        // Decimal separator convention
        let decimal_separators = separator_usage(&checked_prices);
        if let Some(found) = decimal_separators.dominant() {
            let expected = config.decimal_separator();
            self.metrics.record_check(found == expected, false);
            if found != expected {
                warn!(expected = %expected, found = %found, "Wrong decimal separator");
                let shown: Vec<&str> = checked_prices.iter().copied().take(3).collect();
                sink.push(
                    error_type::DECIMAL_SEPARATOR,
                    "Wrong decimal separator",
                    format!(
                        "Expected '{}' but found '{}'. Prices: {:?}",
                        expected, found, shown
                    ),
                );
            }
        }

        // Dates
        let expected_pattern = Some(config.date_pattern()).filter(|p| !p.is_empty());
        let mut seen_dates = HashSet::new();
        let mut dates = Vec::new();
        for date in extract_dates(&snapshot.body_text) {
            if !seen_dates.insert(date.clone()) {
                continue;
            }

            let result = validate_date(&date, language_code, expected_pattern);
            self.metrics
                .record_check(result.is_valid, result.warning.is_some());

            if let Some(issue) = &result.error {
                warn!(date = %date, issue = %issue, "Invalid date");
                sink.push(
                    error_type::DATE_FORMAT,
                    "Wrong date format",
                    format!("Date '{}': {}", date, issue),
                );
            }
            if let Some(issue) = &result.warning {
                debug!(date = %date, issue = %issue, "Date warning");
                if strict {
                    sink.push(
                        error_type::FORMAT_WARNING,
                        "Unexpected date pattern",
                        issue.to_string(),
                    );
                }
            }
            dates.push(result);
        }

        // Keywords
        let keyword_results =
            check_expected_keywords(&snapshot.body_text, config.expected_keywords());
        let keyword_coverage = calculate_keyword_coverage(&keyword_results);
        for (keyword, found) in &keyword_results {
            self.metrics.record_check(*found, false);
            if !found {
                sink.push(
                    error_type::KEYWORD_MISSING,
                    "Expected keyword missing",
                    format!("Keyword '{}' not found on the page", keyword),
                );
            }
        }
        if !keyword_results.is_empty() && keyword_coverage == 0.0 {
            warn!(language = %language_code, "No expected keywords found");
            sink.push(
                error_type::CRITICAL_TEXT_MISSING,
                "Page not translated",
                format!(
                    "None of the {} expected '{}' keywords appear on the page",
                    keyword_results.len(),
                    language_code
                ),
            );
        }
        let keywords = keyword_results
            .into_iter()
            .map(|(keyword, found)| KeywordPresence { keyword, found })
            .collect();

        // Untranslated English
        let untranslated: Vec<String> =
            find_untranslated_english_text(&snapshot.body_text, language_code)
                .into_iter()
                .map(str::to_string)
                .collect();
        self.metrics.record_check(untranslated.is_empty(), false);
        for phrase in &untranslated {
            sink.push(
                error_type::UNTRANSLATED_TEXT,
                "Untranslated text",
                format!("English text '{}' on a '{}' page", phrase, language_code),
            );
        }

        // Element texts
        let language = if snapshot.texts.is_empty() {
            None
        } else {
            let analysis = analyze_page_language(&snapshot.texts, language_code);
            let untranslated_page = analysis.is_untranslated();
            self.metrics.record_check(!untranslated_page, false);
            if untranslated_page {
                warn!(
                    language = %language_code,
                    english = analysis.english,
                    total = analysis.total,
                    "Too much English text"
                );
                sink.push(
                    error_type::UNTRANSLATED,
                    "Too much English text",
                    format!(
                        "Found {}/{} English elements ({:.0}%). Samples: {:?}",
                        analysis.english,
                        analysis.total,
                        analysis.english_rate() * 100.0,
                        analysis.english_samples
                    ),
                );
            }
            Some(analysis)
        };

        // Direction
        let direction = if snapshot.html_dir.is_none() && snapshot.body_dir.is_none() {
            None
        } else {
            let result = check_text_direction(
                snapshot.html_dir.as_deref(),
                snapshot.body_dir.as_deref(),
                config.is_rtl(),
            );
            self.metrics.record_check(result.is_valid, false);
            if !result.is_valid {
                let (title, wanted) = if result.expected_rtl {
                    ("RTL language not displayed as RTL", "rtl")
                } else {
                    ("LTR language displayed as RTL", "ltr")
                };
                sink.push(
                    error_type::RTL,
                    title,
                    format!(
                        "Page should have dir='{}' but found: html={}, body={}",
                        wanted,
                        snapshot.html_dir.as_deref().unwrap_or("none"),
                        snapshot.body_dir.as_deref().unwrap_or("none")
                    ),
                );
            }
            Some(result)
        };

        // Elements
        let mut lengths = Vec::new();
        let mut overflows = Vec::new();
        for element in &snapshot.elements {
            let text = element.text.trim();
            if !text.is_empty() {
                let mut length = check_text_length(text, language_code);
                length.element_id = Some(element.selector.clone());
                self.metrics.record_check(
                    length.status != TextLengthStatus::TooLong,
                    length.status == TextLengthStatus::Warning,
                );
                if length.status == TextLengthStatus::TooLong {
                    sink.push(
                        error_type::TEXT_LENGTH,
                        "Text too long",
                        format!(
                            "Element '{}': {}",
                            element.selector,
                            length.message.as_deref().unwrap_or_default()
                        ),
                    );
                }
                lengths.push(length);
            }

            if let Some(overflow) = check_element_overflow(element) {
                self.metrics.record_check(!overflow.is_overflowing, false);
                if overflow.is_overflowing {
                    warn!(selector = %element.selector, ratio = overflow.overflow_ratio, "Text overflow");
                    sink.push(
                        error_type::TEXT_OVERFLOW,
                        "Text overflow",
                        format!(
                            "Element '{}' overflows (ratio: {:.2})",
                            element.selector, overflow.overflow_ratio
                        ),
                    );
                }
                overflows.push(overflow);
            }
        }

        let errors_recorded = sink.recorded;
        info!(
            language = %language_code,
            url = %snapshot.url,
            errors = errors_recorded,
            keyword_coverage = keyword_coverage,
            "Page audit complete"
        );

        Ok(PageAudit {
            url: snapshot.url.clone(),
            language_code: language_code.to_string(),
            prices,
            decimal_separators,
            dates,
            keywords,
            keyword_coverage,
            untranslated,
            lengths,
            overflows,
            direction,
            language,
            errors_recorded,
        })
    }
}
