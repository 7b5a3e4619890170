//! Decision table: per-language formatting expectations.
//!
//! The table is built once, never mutated, and passed by reference to
//! everything that needs it. Each row carries the raw expectations of a
//! language (currencies, date pattern, separators, keywords) plus four
//! classification axes that are derived from the code and the decimal
//! separator when the row is constructed.

use crate::error::{Error, Result};
use crate::locale::builtin::BUILTIN_LANGUAGES;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

// ==================== Classification Axes ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecimalSeparatorType {
    /// 1.00
    Dot,
    /// 1,00
    Comma,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupingSeparatorType {
    /// 1,000
    Comma,
    /// 1.000
    Dot,
    /// 1 000
    Space,
    /// 1000
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScriptGroup {
    Latin,
    Cyrillic,
    Cjk,
    Arabic,
    Hebrew,
    Indic,
    Thai,
    Other,
}

/// Equivalence partition used to pick languages for targeted checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestGroup {
    LatinDot,
    LatinComma,
    DoubleByte,
    Rtl,
    Cyrillic,
    Indic,
}

impl TestGroup {
    pub const ALL: [TestGroup; 6] = [
        TestGroup::LatinDot,
        TestGroup::LatinComma,
        TestGroup::DoubleByte,
        TestGroup::Rtl,
        TestGroup::Cyrillic,
        TestGroup::Indic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestGroup::LatinDot => "LATIN_DOT",
            TestGroup::LatinComma => "LATIN_COMMA",
            TestGroup::DoubleByte => "DOUBLE_BYTE",
            TestGroup::Rtl => "RTL",
            TestGroup::Cyrillic => "CYRILLIC",
            TestGroup::Indic => "INDIC",
        }
    }
}

impl fmt::Display for TestGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const RTL_CODES: &[&str] = &["ar", "he", "fa"];
const CJK_CODES: &[&str] = &["ja", "zh", "tw", "ko"];
const CYRILLIC_CODES: &[&str] = &["ru", "uk", "bg", "mk", "sr"];
const INDIC_CODES: &[&str] = &["hi", "bn"];

/// One canonical language per test group.
const REPRESENTATIVE_CODES: [(TestGroup, &str); 6] = [
    (TestGroup::LatinDot, "en"),
    (TestGroup::LatinComma, "fr"),
    (TestGroup::DoubleByte, "ja"),
    (TestGroup::Rtl, "ar"),
    (TestGroup::Cyrillic, "ru"),
    (TestGroup::Indic, "hi"),
];

pub fn decimal_separator_type(decimal_separator: &str) -> DecimalSeparatorType {
    if decimal_separator == "." {
        DecimalSeparatorType::Dot
    } else {
        DecimalSeparatorType::Comma
    }
}

pub fn grouping_separator_type(thousand_separator: &str) -> GroupingSeparatorType {
    match thousand_separator {
        "," => GroupingSeparatorType::Comma,
        "." => GroupingSeparatorType::Dot,
        " " => GroupingSeparatorType::Space,
        _ => GroupingSeparatorType::None,
    }
}

pub fn script_group(code: &str) -> ScriptGroup {
    match code {
        "ar" | "fa" => ScriptGroup::Arabic,
        "he" => ScriptGroup::Hebrew,
        "ru" | "uk" | "bg" | "mk" | "sr" => ScriptGroup::Cyrillic,
        "ja" | "zh" | "tw" | "ko" => ScriptGroup::Cjk,
        "hi" | "bn" => ScriptGroup::Indic,
        "th" => ScriptGroup::Thai,
        _ => ScriptGroup::Latin,
    }
}

pub fn is_rtl_language(code: &str) -> bool {
    RTL_CODES.contains(&code)
}

/// First match wins: RTL, CJK, Cyrillic, Indic, then Latin split on the
/// decimal separator.
pub fn test_group(code: &str, is_rtl: bool, decimal_type: DecimalSeparatorType) -> TestGroup {
    if is_rtl {
        TestGroup::Rtl
    } else if CJK_CODES.contains(&code) {
        TestGroup::DoubleByte
    } else if CYRILLIC_CODES.contains(&code) {
        TestGroup::Cyrillic
    } else if INDIC_CODES.contains(&code) {
        TestGroup::Indic
    } else if decimal_type == DecimalSeparatorType::Dot {
        TestGroup::LatinDot
    } else {
        TestGroup::LatinComma
    }
}

// ==================== Language Rows ====================

/// The raw, non-derived part of a decision-table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSpec {
    pub code: String,
    pub language_name: String,
    pub primary_currency: String,
    pub secondary_currency: String,
    #[serde(default)]
    pub default_currency: Option<String>,
    pub date_pattern: String,
    pub decimal_separator: String,
    pub thousand_separator: String,
    #[serde(default)]
    pub expected_keywords: Vec<String>,
}

/// A complete decision-table row.
///
/// Construct with [`LanguageConfig::new`]; the derived axes are computed
/// there and the row is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "LanguageRecord")]
pub struct LanguageConfig {
    code: String,
    language_name: String,
    primary_currency: String,
    secondary_currency: String,
    default_currency: Option<String>,
    date_pattern: String,
    decimal_separator: String,
    thousand_separator: String,
    expected_keywords: Vec<String>,
    #[serde(rename = "isRTL")]
    is_rtl: bool,
    decimal_separator_type: DecimalSeparatorType,
    grouping_separator_type: GroupingSeparatorType,
    script_group: ScriptGroup,
    test_group: TestGroup,
}

impl LanguageConfig {
    pub fn new(spec: LanguageSpec) -> Self {
        let decimal_type = decimal_separator_type(&spec.decimal_separator);
        let grouping_type = grouping_separator_type(&spec.thousand_separator);
        let script = script_group(&spec.code);
        let is_rtl = is_rtl_language(&spec.code);
        let group = test_group(&spec.code, is_rtl, decimal_type);

        Self {
            code: spec.code,
            language_name: spec.language_name,
            primary_currency: spec.primary_currency,
            secondary_currency: spec.secondary_currency,
            default_currency: spec.default_currency,
            date_pattern: spec.date_pattern,
            decimal_separator: spec.decimal_separator,
            thousand_separator: spec.thousand_separator,
            expected_keywords: spec.expected_keywords,
            is_rtl,
            decimal_separator_type: decimal_type,
            grouping_separator_type: grouping_type,
            script_group: script,
            test_group: group,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language_name(&self) -> &str {
        &self.language_name
    }

    pub fn primary_currency(&self) -> &str {
        &self.primary_currency
    }

    pub fn secondary_currency(&self) -> &str {
        &self.secondary_currency
    }

    pub fn default_currency(&self) -> Option<&str> {
        self.default_currency.as_deref()
    }

    /// Primary, secondary and (if set) default currency, in that order.
    pub fn accepted_currencies(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.primary_currency.as_str()),
            Some(self.secondary_currency.as_str()),
            self.default_currency.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Regular expression a localized date is expected to match.
    pub fn date_pattern(&self) -> &str {
        &self.date_pattern
    }

    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    pub fn thousand_separator(&self) -> &str {
        &self.thousand_separator
    }

    pub fn expected_keywords(&self) -> &[String] {
        &self.expected_keywords
    }

    pub fn is_rtl(&self) -> bool {
        self.is_rtl
    }

    pub fn decimal_separator_type(&self) -> DecimalSeparatorType {
        self.decimal_separator_type
    }

    pub fn grouping_separator_type(&self) -> GroupingSeparatorType {
        self.grouping_separator_type
    }

    pub fn script_group(&self) -> ScriptGroup {
        self.script_group
    }

    pub fn test_group(&self) -> TestGroup {
        self.test_group
    }
}

/// Wire form of a row. Derived fields are optional; when present they must
/// agree with what the constructor derives.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LanguageRecord {
    #[serde(flatten)]
    spec: LanguageSpec,
    #[serde(rename = "isRTL")]
    is_rtl: Option<bool>,
    decimal_separator_type: Option<DecimalSeparatorType>,
    grouping_separator_type: Option<GroupingSeparatorType>,
    script_group: Option<ScriptGroup>,
    test_group: Option<TestGroup>,
}

impl TryFrom<LanguageRecord> for LanguageConfig {
    type Error = Error;

    fn try_from(record: LanguageRecord) -> Result<Self> {
        if record.spec.code.trim().is_empty() {
            return Err(Error::InvalidEntry {
                code: record.spec.code,
                reason: "language code is empty".to_string(),
            });
        }

        let config = LanguageConfig::new(record.spec);
        let invalid = |field: &str| Error::InvalidEntry {
            code: config.code.clone(),
            reason: format!("{} disagrees with the value derived from the row", field),
        };

        if record.is_rtl.is_some_and(|v| v != config.is_rtl) {
            return Err(invalid("isRTL"));
        }
        if record
            .decimal_separator_type
            .is_some_and(|v| v != config.decimal_separator_type)
        {
            return Err(invalid("decimalSeparatorType"));
        }
        if record
            .grouping_separator_type
            .is_some_and(|v| v != config.grouping_separator_type)
        {
            return Err(invalid("groupingSeparatorType"));
        }
        if record.script_group.is_some_and(|v| v != config.script_group) {
            return Err(invalid("scriptGroup"));
        }
        if record.test_group.is_some_and(|v| v != config.test_group) {
            return Err(invalid("testGroup"));
        }

        Ok(config)
    }
}

// ==================== Table ====================

/// Immutable mapping from language code to [`LanguageConfig`].
///
/// Holds no interior mutability, so a shared reference can be read from any
/// number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    languages: BTreeMap<String, LanguageConfig>,
}

impl LanguageTable {
    /// The storefront languages shipped with the crate.
    pub fn builtin() -> Self {
        let languages = BUILTIN_LANGUAGES
            .iter()
            .map(|row| {
                let config = LanguageConfig::new(row.to_spec());
                (config.code.clone(), config)
            })
            .collect();
        Self { languages }
    }

    /// Build a table from rows. Codes must be unique.
    pub fn from_configs(configs: impl IntoIterator<Item = LanguageConfig>) -> Result<Self> {
        let mut languages = BTreeMap::new();
        for config in configs {
            if languages.contains_key(&config.code) {
                return Err(Error::DuplicateLanguage(config.code));
            }
            languages.insert(config.code.clone(), config);
        }
        Ok(Self { languages })
    }

    /// Look up a row.
    ///
    /// # Arguments
    /// * `code` - Language code as used in storefront URLs, e.g. `"fr"`
    ///
    /// # Returns
    /// The row, or `None` for unknown codes.
    pub fn get(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.get(code)
    }

    /// Checked lookup for callers that cannot continue without a row.
    ///
    /// # Returns
    /// The row, or `Error::UnsupportedLanguage` naming `code`.
    ///
    /// ```rust
    /// use l10n_check::{Error, LanguageTable};
    ///
    /// let table = LanguageTable::builtin();
    /// assert_eq!(table.require("fr").unwrap().decimal_separator(), ",");
    /// assert!(matches!(table.require("tlh"), Err(Error::UnsupportedLanguage(code)) if code == "tlh"));
    /// ```
    pub fn require(&self, code: &str) -> Result<&LanguageConfig> {
        self.get(code)
            .ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    /// All codes, sorted.
    pub fn supported_codes(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Rows in code order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageConfig> {
        self.languages.values()
    }

    pub fn by_test_group(&self, group: TestGroup) -> Vec<&LanguageConfig> {
        self.iter().filter(|c| c.test_group == group).collect()
    }

    pub fn by_script_group(&self, group: ScriptGroup) -> Vec<&LanguageConfig> {
        self.iter().filter(|c| c.script_group == group).collect()
    }

    pub fn rtl_languages(&self) -> Vec<&LanguageConfig> {
        self.iter().filter(|c| c.is_rtl).collect()
    }

    /// One canonical language per test group (en, fr, ja, ar, ru, hi).
    /// Groups whose canonical code is missing from the table are left out.
    pub fn representatives(&self) -> BTreeMap<TestGroup, &LanguageConfig> {
        REPRESENTATIVE_CODES
            .iter()
            .filter_map(|(group, code)| self.get(code).map(|config| (*group, config)))
            .collect()
    }

    /// Parse a table from its JSON form: an object keyed by language code.
    ///
    /// # Returns
    /// `Error::Json` for malformed JSON or a row whose derived fields
    /// disagree with its data, `Error::InvalidEntry` for a row keyed under
    /// another code.
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: BTreeMap<String, LanguageConfig> = serde_json::from_str(json)?;
        check_keys(&parsed)?;
        Ok(Self { languages: parsed })
    }

    /// New table with the rows from `json` replacing or extending this one.
    ///
    /// # Arguments
    /// * `json` - Rows in the same form [`LanguageTable::from_json`] reads
    ///
    /// # Returns
    /// The merged table; `self` is left unchanged. Errors as for `from_json`.
    pub fn with_overrides_json(&self, json: &str) -> Result<Self> {
        let overrides: BTreeMap<String, LanguageConfig> = serde_json::from_str(json)?;
        check_keys(&overrides)?;

        let mut languages = self.languages.clone();
        for (code, config) in overrides {
            let replaced = languages.insert(code.clone(), config).is_some();
            debug!(code = %code, replaced, "Applied decision table override");
        }
        Ok(Self { languages })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.languages)?)
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_keys(rows: &BTreeMap<String, LanguageConfig>) -> Result<()> {
    match rows.iter().find(|(key, config)| key.as_str() != config.code) {
        Some((key, config)) => Err(Error::InvalidEntry {
            code: key.clone(),
            reason: format!("keyed as '{}' but the row says '{}'", key, config.code),
        }),
        None => Ok(()),
    }
}
