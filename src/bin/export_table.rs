//! Export the effective decision table as JSON
//!
//! Usage:
//!   cargo run --bin export-table                    # Writes data/decision_table.json
//!   cargo run --bin export-table -- out/table.json
//!
//! Optional:
//! - L10N_TABLE_PATH (overrides merged into the built-in table before export)

use anyhow::{Context, Result};
use l10n_check::config::Config;
use std::fs;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_OUTPUT: &str = "data/decision_table.json";

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("l10n_check=info".parse()?)
                .add_directive("export_table=info".parse()?),
        )
        .init();

    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let config = Config::from_env()?;
    let table = config.load_table()?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create output directory")?;
    }

    let json = table.to_json().context("Failed to serialize decision table")?;
    fs::write(&output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Exported {} languages to {}", table.len(), output.display());
    Ok(())
}
