//! Audit a page snapshot for one storefront language
//!
//! Usage:
//!   cargo run -- data/snapshot.json
//!   L10N_LANGUAGE=de cargo run -- page.json
//!
//! Optional environment variables:
//! - L10N_LANGUAGE (defaults to en)
//! - L10N_TABLE_PATH (JSON decision table overrides)
//! - L10N_STRICT_WARNINGS (defaults to false)
//! - L10N_MAX_PRICE_LENGTH (defaults to 50)
//!
//! Prints the JSON report to stdout and exits with status 1 when any HIGH or
//! CRITICAL error was found.

use anyhow::{Context, Result};
use l10n_check::audit::{severity_counts, MetricsReport, PageAudit, PageAuditor, PageSnapshot};
use l10n_check::config::Config;
use l10n_check::{L10nError, Severity};
use serde::Serialize;
use std::collections::BTreeMap;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    audit: &'a PageAudit,
    errors: &'a [L10nError],
    severity_counts: BTreeMap<Severity, usize>,
    metrics: MetricsReport,
}

fn main() -> Result<ExitCode> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("l10n_check=info".parse()?),
        )
        .init();

    let snapshot_path = std::env::args()
        .nth(1)
        .context("Usage: l10n-check <snapshot.json>")?;

    let config = Config::from_env()?;
    let table = config.load_table()?;
    info!(
        "Checking {} against '{}' ({} languages loaded)",
        snapshot_path,
        config.language,
        table.len()
    );

    let snapshot_json = std::fs::read_to_string(&snapshot_path)
        .with_context(|| format!("Failed to read snapshot {}", snapshot_path))?;
    let snapshot: PageSnapshot =
        serde_json::from_str(&snapshot_json).context("Failed to parse page snapshot")?;

    let auditor = PageAuditor::new(&table, config.warning_policy())
        .with_max_price_length(config.max_price_length);
    info!(policy = ?auditor.policy(), "Auditor ready");
    let mut errors = Vec::new();
    let audit = auditor.audit(&config.language, &snapshot, &mut errors)?;

    let counts = severity_counts(&errors);
    let metrics = auditor.metrics().report();
    info!(
        "{} errors, {}/{} checks passed ({:.1}%)",
        errors.len(),
        metrics.checks_passed,
        metrics.checks_run,
        metrics.pass_rate
    );

    let report = Report {
        audit: &audit,
        errors: &errors,
        severity_counts: counts,
        metrics,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    let blocking = errors.iter().any(|e| e.severity() >= Severity::High);
    if blocking {
        warn!("High or critical localization errors found");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
