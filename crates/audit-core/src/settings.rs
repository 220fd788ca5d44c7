use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Offline audit summaries over a transactions ledger
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ledger-audit",
    about = "Offline audit summaries over a transactions ledger",
    version
)]
pub struct Settings {
    /// Path to the transactions JSON document
    #[arg(long, default_value = "transactions.json")]
    pub file: PathBuf,

    /// Also print sent totals and open-issue status for this client
    #[arg(long)]
    pub client: Option<String>,

    /// Logging level
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

// ── Tests ──────────────────────────────────────────────────────────────────────
