//! Locale-aware validation of storefront content.
//!
//! A decision table ([`locale::LanguageTable`]) says what each language
//! expects: currencies, date layout, number separators and the UI keywords a
//! translated page should show. The checkers in [`checks`] judge prices,
//! dates and text against one table row, and [`audit`] runs them over a
//! whole page, collecting [`L10nError`] records with severities.
//!
//! ```rust
//! use l10n_check::checks::currency::validate_currency;
//! use l10n_check::LanguageTable;
//!
//! let table = LanguageTable::builtin();
//! let result = validate_currency("1 234,56 €", table.get("fr").unwrap());
//! assert!(result.is_valid);
//! assert_eq!(result.numeric_value, Some(1234.56));
//! ```

pub mod audit;
pub mod checks;
pub mod config;
pub mod error;
pub mod locale;

pub use audit::{severity_counts, PageAudit, PageAuditor, PageSnapshot, WarningPolicy};
pub use checks::CheckIssue;
pub use error::{Error, L10nError, Result, Severity};
pub use locale::{LanguageConfig, LanguageTable, TestGroup};
