mod bootstrap;

use anyhow::Result;
use audit_core::formatting::format_amount;
use audit_core::settings::Settings;
use audit_data::report::{client_summary, run_audit, AuditReport, ClientSummary};
use clap::Parser;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Ledger Audit v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Document: {}", settings.file.display());

    let report = run_audit(Some(&settings.file))?;
    print!("{}", render_report(&report));

    if let Some(client) = &settings.client {
        let summary = client_summary(&report.ledger, client);
        print!("{}", render_client_summary(&summary));
    }

    Ok(())
}

// ── Rendering ──────────────────────────────────────────────────────────────────

/// Render the audit report as plain text.
fn render_report(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Audit of {} ({} transactions)\n\n",
        report.metadata.document, report.metadata.transactions_loaded
    ));

    out.push_str(&format!(
        "Total amount:       {}\n",
        format_amount(report.total_amount)
    ));
    match report.max_amount {
        Some(max) => out.push_str(&format!("Largest transfer:   {}\n", format_amount(max))),
        None => out.push_str("Largest transfer:   n/a\n"),
    }
    out.push_str(&format!("Unique clients:     {}\n", report.unique_clients));
    match &report.top_sender {
        Some(sender) => out.push_str(&format!(
            "Top sender:         {} ({}% of total)\n",
            sender, report.top_sender_share
        )),
        None => out.push_str("Top sender:         n/a\n"),
    }

    if !report.top_transfers.is_empty() {
        out.push_str("\nTop transfers:\n");
        for transfer in &report.top_transfers {
            out.push_str(&format!(
                "  #{:<8} {:>12}  {} -> {}\n",
                transfer.mtn,
                format_amount(transfer.amount),
                transfer.sender,
                transfer.beneficiary
            ));
        }
    }

    if !report.transfers_per_beneficiary.is_empty() {
        out.push_str("\nTransfers per beneficiary:\n");
        for (name, count) in &report.transfers_per_beneficiary {
            out.push_str(&format!("  {:<24} {}\n", name, count));
        }
    }

    if report.open_issue_ids.is_empty() {
        out.push_str("\nOpen compliance issues: none\n");
    } else {
        let ids: Vec<String> = report.open_issue_ids.iter().map(u64::to_string).collect();
        out.push_str(&format!("\nOpen compliance issues: {}\n", ids.join(", ")));
    }

    if !report.solved_issue_messages.is_empty() {
        out.push_str("Resolved issue messages:\n");
        for message in &report.solved_issue_messages {
            out.push_str(&format!("  - {}\n", message));
        }
    }

    out
}

/// Render the per-client summary requested via `--client`.
fn render_client_summary(summary: &ClientSummary) -> String {
    format!(
        "\nClient {}:\n  Total sent:        {}\n  Open issues:       {}\n",
        summary.client,
        format_amount(summary.total_sent),
        if summary.has_open_issues { "yes" } else { "no" }
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────────
