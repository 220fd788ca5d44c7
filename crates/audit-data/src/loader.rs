//! Transactions document loading for Ledger Audit.
//!
//! Reads a JSON document whose top-level value is an array of transaction
//! objects and converts it into [`Transaction`] records for the query layer.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use audit_core::error::{AuditError, Result};
use audit_core::models::Transaction;
use tracing::debug;

/// Document name used when no explicit path is given, resolved relative to
/// the working directory.
pub const DEFAULT_DOCUMENT: &str = "transactions.json";

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and parse a transactions document into [`Transaction`] records.
///
/// * `path` – document to read; `None` falls back to [`DEFAULT_DOCUMENT`].
///
/// The order of records in the source array is preserved. Unknown keys are
/// ignored and absent issue fields are permitted; no deduplication or
/// validation beyond structural parsing is performed.
pub fn load_transactions(path: Option<&Path>) -> Result<Vec<Transaction>> {
    let path = resolve_document_path(path);

    let file = File::open(&path).map_err(|source| AuditError::FileRead {
        path: path.clone(),
        source,
    })?;
    let reader = BufReader::new(file);
    let transactions: Vec<Transaction> = serde_json::from_reader(reader)?;

    debug!(
        "Loaded {} transactions from {}",
        transactions.len(),
        path.display()
    );

    Ok(transactions)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Resolve the document path: use `path` when given, otherwise fall back to
/// [`DEFAULT_DOCUMENT`] in the working directory.
fn resolve_document_path(path: Option<&Path>) -> PathBuf {
    match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(DEFAULT_DOCUMENT),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_document(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    fn sample_record(mtn: u64, amount: f64, sender: &str, beneficiary: &str) -> serde_json::Value {
        serde_json::json!({
            "mtn": mtn,
            "amount": amount,
            "senderFullName": sender,
            "senderAge": 30,
            "beneficiaryFullName": beneficiary,
            "beneficiaryAge": 40,
            "issueId": null,
            "issueSolved": true,
            "issueMessage": null,
        })
    }

    // ── load_transactions ─────────────────────────────────────────────────────

    #[test]
    fn test_load_basic_document() {
        let dir = TempDir::new().unwrap();
        let doc = serde_json::json!([
            sample_record(1, 100.0, "Tom Shelby", "Alfie Solomons"),
            sample_record(2, 250.5, "Aunt Polly", "Michael Gray"),
        ]);
        let path = write_document(dir.path(), "transactions.json", &doc.to_string());

        let transactions = load_transactions(Some(&path)).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].mtn, 1);
        assert_eq!(transactions[1].sender_full_name, "Aunt Polly");
    }

    #[test]
    fn test_load_preserves_source_order() {
        let dir = TempDir::new().unwrap();
        let doc = serde_json::json!([
            sample_record(30, 1.0, "C", "Z"),
            sample_record(10, 2.0, "A", "Z"),
            sample_record(20, 3.0, "B", "Z"),
        ]);
        let path = write_document(dir.path(), "transactions.json", &doc.to_string());

        let transactions = load_transactions(Some(&path)).unwrap();
        let mtns: Vec<u64> = transactions.iter().map(|t| t.mtn).collect();
        assert_eq!(mtns, vec![30, 10, 20]);
    }

    #[test]
    fn test_load_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = write_document(dir.path(), "transactions.json", "[]");

        let transactions = load_transactions(Some(&path)).unwrap();
        assert!(transactions.is_empty());
    }

    #[test]
    fn test_load_keeps_duplicate_records() {
        // No deduplication: the same mtn may appear twice.
        let dir = TempDir::new().unwrap();
        let doc = serde_json::json!([
            sample_record(7, 10.0, "A", "B"),
            sample_record(7, 10.0, "A", "B"),
        ]);
        let path = write_document(dir.path(), "transactions.json", &doc.to_string());

        let transactions = load_transactions(Some(&path)).unwrap();
        assert_eq!(transactions.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_file_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_transactions(Some(&path)).unwrap_err();
        match err {
            AuditError::FileRead { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected FileRead, got {other:?}"),
        }
    }

    #[test]
    fn test_load_malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_document(dir.path(), "transactions.json", "[{not json");

        let err = load_transactions(Some(&path)).unwrap_err();
        assert!(matches!(err, AuditError::JsonParse(_)));
    }

    #[test]
    fn test_load_non_array_payload_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_document(dir.path(), "transactions.json", r#"{"mtn": 1}"#);

        let err = load_transactions(Some(&path)).unwrap_err();
        assert!(matches!(err, AuditError::JsonParse(_)));
    }

    #[test]
    fn test_load_record_missing_issue_fields() {
        let dir = TempDir::new().unwrap();
        let doc = r#"[{
            "mtn": 1,
            "amount": 15.0,
            "senderFullName": "Arthur Shelby",
            "senderAge": 60,
            "beneficiaryFullName": "Ada Thorne",
            "beneficiaryAge": 50
        }]"#;
        let path = write_document(dir.path(), "transactions.json", doc);

        let transactions = load_transactions(Some(&path)).unwrap();
        assert!(transactions[0].issue_solved);
        assert_eq!(transactions[0].issue_id, None);
    }

    // ── resolve_document_path ─────────────────────────────────────────────────

    #[test]
    fn test_resolve_document_path_default() {
        assert_eq!(
            resolve_document_path(None),
            PathBuf::from(DEFAULT_DOCUMENT)
        );
    }

    #[test]
    fn test_resolve_document_path_explicit() {
        let explicit = Path::new("/data/ledger.json");
        assert_eq!(resolve_document_path(Some(explicit)), explicit);
    }
}
