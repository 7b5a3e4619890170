//! Locale decision table.
//!
//! # Architecture
//!
//! - `table`: row type, derivation of the classification axes, and the
//!   immutable [`LanguageTable`] with its group-filtered lookups
//! - `builtin`: the storefront languages shipped with the crate
//!
//! # Example
//!
//! ```rust
//! use l10n_check::locale::{LanguageTable, TestGroup};
//!
//! let table = LanguageTable::builtin();
//! assert!(table.is_supported("fr"));
//! assert_eq!(table.get("ja").unwrap().test_group(), TestGroup::DoubleByte);
//! ```

mod builtin;
mod table;

pub use table::{
    decimal_separator_type, grouping_separator_type, is_rtl_language, script_group, test_group,
    DecimalSeparatorType, GroupingSeparatorType, LanguageConfig, LanguageSpec, LanguageTable,
    ScriptGroup, TestGroup,
};
