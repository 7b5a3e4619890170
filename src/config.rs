use crate::audit::{WarningPolicy, DEFAULT_MAX_PRICE_LENGTH};
use crate::locale::LanguageTable;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Audit target
    pub language: String,

    // Decision table overrides (JSON file)
    pub table_path: Option<PathBuf>,

    // Policy
    pub strict_warnings: bool,
    pub max_price_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            table_path: None,
            strict_warnings: false,
            max_price_length: DEFAULT_MAX_PRICE_LENGTH,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            language: std::env::var("L10N_LANGUAGE")
                .map(|v| v.trim().to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "en".to_string()),

            table_path: std::env::var("L10N_TABLE_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),

            strict_warnings: match std::env::var("L10N_STRICT_WARNINGS") {
                Ok(value) => parse_flag(&value).context("L10N_STRICT_WARNINGS is not a boolean")?,
                Err(_) => false,
            },

            max_price_length: std::env::var("L10N_MAX_PRICE_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_PRICE_LENGTH),
        })
    }

    /// Build the decision table the binaries audit against.
    ///
    /// # Returns
    /// The built-in table, with the rows of `table_path` merged over it
    /// when that path is set. Unreadable or invalid files are errors
    /// naming the path.
    pub fn load_table(&self) -> Result<LanguageTable> {
        let table = LanguageTable::builtin();
        let Some(path) = &self.table_path else {
            return Ok(table);
        };

        info!("Applying decision table overrides from {}", path.display());
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read decision table {}", path.display()))?;
        table
            .with_overrides_json(&json)
            .with_context(|| format!("Invalid decision table {}", path.display()))
    }

    pub fn warning_policy(&self) -> WarningPolicy {
        if self.strict_warnings {
            WarningPolicy::Strict
        } else {
            WarningPolicy::Lenient
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("unrecognized flag value '{}'", other),
    }
}
