//! Audit report pipeline for Ledger Audit.
//!
//! Loads the transactions document, evaluates the full query catalogue once
//! and returns an [`AuditReport`] ready for rendering.

use std::path::Path;

use audit_core::error::Result;
use chrono::Utc;

use crate::ledger::Ledger;
use crate::loader::DEFAULT_DOCUMENT;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the audit report.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReportMetadata {
    /// ISO-8601 timestamp when this report was generated.
    pub generated_at: String,
    /// Document the transactions were read from.
    pub document: String,
    /// Number of transaction records loaded.
    pub transactions_loaded: usize,
    /// Wall-clock seconds spent loading and parsing the document.
    pub load_time_seconds: f64,
}

/// One row of the top-transfers table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TopTransfer {
    pub mtn: u64,
    pub amount: f64,
    pub sender: String,
    pub beneficiary: String,
}

/// The complete output of [`run_audit`].
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Sum of all transfer amounts.
    pub total_amount: f64,
    /// Highest single transfer amount, absent for an empty document.
    pub max_amount: Option<f64>,
    /// Number of distinct clients on either side of a transfer.
    pub unique_clients: usize,
    /// Identifiers of open compliance issues, sorted ascending for display.
    pub open_issue_ids: Vec<u64>,
    /// Messages of resolved compliance issues, in document order.
    pub solved_issue_messages: Vec<String>,
    /// Up to three largest transfers, descending by amount.
    pub top_transfers: Vec<TopTransfer>,
    /// Sender with the greatest total sent amount, if any.
    pub top_sender: Option<String>,
    /// The top sender's share of the grand total, as a percentage.
    pub top_sender_share: f64,
    /// Per-beneficiary transfer counts, sorted by name.
    pub transfers_per_beneficiary: Vec<(String, usize)>,
    /// The loaded dataset the report was computed from.
    pub ledger: Ledger,
    /// Metadata about this audit run.
    pub metadata: ReportMetadata,
}

/// Per-client view combining sent totals with open-issue status.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSummary {
    pub client: String,
    /// Sum of amounts the client sent.
    pub total_sent: f64,
    /// Whether the client is the beneficiary of an open compliance issue.
    pub has_open_issues: bool,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full audit pipeline.
///
/// 1. Load the transactions document at `path` (default document when `None`).
/// 2. Evaluate the query catalogue over the resulting [`Ledger`].
/// 3. Return an [`AuditReport`].
pub fn run_audit(path: Option<&Path>) -> Result<AuditReport> {
    let load_start = std::time::Instant::now();
    let ledger = Ledger::open(path)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let metadata = ReportMetadata {
        generated_at: Utc::now().to_rfc3339(),
        document: path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| DEFAULT_DOCUMENT.to_string()),
        transactions_loaded: ledger.len(),
        load_time_seconds: load_time,
    };

    Ok(build_report(ledger, metadata))
}

/// Summarise a single client over an already-loaded ledger.
pub fn client_summary(ledger: &Ledger, client_full_name: &str) -> ClientSummary {
    ClientSummary {
        client: client_full_name.to_string(),
        total_sent: ledger.total_amount_sent_by(client_full_name),
        has_open_issues: ledger.has_open_compliance_issues(client_full_name),
    }
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// Evaluate every catalogue query over `ledger` and assemble the report.
fn build_report(ledger: Ledger, metadata: ReportMetadata) -> AuditReport {
    let total_amount = ledger.total_amount();

    let mut open_issue_ids: Vec<u64> = ledger.unsolved_issue_ids().into_iter().collect();
    open_issue_ids.sort_unstable();

    let top_transfers: Vec<TopTransfer> = ledger
        .top_three_by_amount()
        .into_iter()
        .map(|tx| TopTransfer {
            mtn: tx.mtn,
            amount: tx.amount,
            sender: tx.sender_full_name.clone(),
            beneficiary: tx.beneficiary_full_name.clone(),
        })
        .collect();

    let top_sender = ledger.top_sender().map(str::to_string);
    let top_sender_share = top_sender
        .as_deref()
        .map(|name| {
            audit_core::formatting::percentage(ledger.total_amount_sent_by(name), total_amount)
        })
        .unwrap_or(0.0);

    let transfers_per_beneficiary: Vec<(String, usize)> = ledger
        .transactions_by_beneficiary()
        .into_iter()
        .map(|(name, group)| (name.to_string(), group.len()))
        .collect();

    AuditReport {
        total_amount,
        max_amount: ledger.max_amount(),
        unique_clients: ledger.count_unique_clients(),
        open_issue_ids,
        solved_issue_messages: ledger
            .solved_issue_messages()
            .into_iter()
            .map(str::to_string)
            .collect(),
        top_transfers,
        top_sender,
        top_sender_share,
        transfers_per_beneficiary,
        ledger,
        metadata,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
