//! Query catalogue over a loaded transactions dataset.
//!
//! [`Ledger`] owns the ordered, immutable sequence of [`Transaction`] records
//! produced by the loader and answers the fixed set of summary questions:
//! sums, extremes, groupings, uniqueness counts, and compliance-issue
//! filters. Every query is a pure linear scan over the dataset and cannot
//! fail once the document has been loaded.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use audit_core::error::Result;
use audit_core::models::Transaction;

use crate::loader::load_transactions;

// ── Ledger ────────────────────────────────────────────────────────────────────

/// Read-only view over an ordered set of money transfers.
///
/// The dataset is fixed at construction and never mutated, so a shared
/// `Ledger` can be read from any number of threads.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Wrap an already-loaded dataset. Record order is kept as given.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Load the document at `path` (or the default document when `None`)
    /// and build a ledger over it.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        Ok(Self::new(load_transactions(path)?))
    }

    /// The underlying records, in document order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    // ── Amount queries ────────────────────────────────────────────────────────

    /// Sum of the amounts of all transfers. Empty dataset sums to zero.
    pub fn total_amount(&self) -> f64 {
        self.transactions.iter().map(|tx| tx.amount).sum()
    }

    /// Sum of the amounts of all transfers sent by `sender_full_name`
    /// (exact, case-sensitive match). Zero when the name never appears.
    pub fn total_amount_sent_by(&self, sender_full_name: &str) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| tx.sender_full_name == sender_full_name)
            .map(|tx| tx.amount)
            .sum()
    }

    /// Highest transfer amount, or `None` for an empty dataset.
    pub fn max_amount(&self) -> Option<f64> {
        self.transactions
            .iter()
            .map(|tx| tx.amount)
            .max_by(f64::total_cmp)
    }

    /// Up to three transfers with the largest amounts, in descending amount
    /// order. Transfers with equal amounts keep their document order.
    pub fn top_three_by_amount(&self) -> Vec<&Transaction> {
        let mut ranked: Vec<&Transaction> = self.transactions.iter().collect();
        // Stable sort: equal amounts retain dataset order.
        ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        ranked.truncate(3);
        ranked
    }

    /// Sender with the strictly greatest total sent amount.
    ///
    /// Returns `None` for an empty dataset and when every per-sender total is
    /// zero. When two senders tie, the one appearing first in the document
    /// wins.
    pub fn top_sender(&self) -> Option<&str> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for tx in &self.transactions {
            let name = tx.sender_full_name.as_str();
            if !totals.contains_key(name) {
                first_seen.push(name);
            }
            *totals.entry(name).or_insert(0.0) += tx.amount;
        }

        let mut top: Option<&str> = None;
        let mut max_total = 0.0;
        for name in first_seen {
            let total = totals[name];
            if total > max_total {
                max_total = total;
                top = Some(name);
            }
        }
        top
    }

    // ── Client queries ────────────────────────────────────────────────────────

    /// Number of distinct clients appearing as sender or beneficiary.
    /// A name on both sides counts once.
    pub fn count_unique_clients(&self) -> usize {
        let mut clients: HashSet<&str> = HashSet::new();
        for tx in &self.transactions {
            clients.insert(tx.sender_full_name.as_str());
            clients.insert(tx.beneficiary_full_name.as_str());
        }
        clients.len()
    }

    /// Whether `client_full_name` is the beneficiary of at least one transfer
    /// whose compliance issue is still open. The sender side is not
    /// consulted.
    pub fn has_open_compliance_issues(&self, client_full_name: &str) -> bool {
        self.transactions
            .iter()
            .any(|tx| tx.has_open_issue() && tx.beneficiary_full_name == client_full_name)
    }

    /// All transfers grouped by beneficiary name. Within each group the
    /// document order is preserved; names that never appear as beneficiary
    /// are absent from the map.
    pub fn transactions_by_beneficiary(&self) -> BTreeMap<&str, Vec<&Transaction>> {
        let mut by_beneficiary: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
        for tx in &self.transactions {
            by_beneficiary
                .entry(tx.beneficiary_full_name.as_str())
                .or_default()
                .push(tx);
        }
        by_beneficiary
    }

    // ── Compliance queries ────────────────────────────────────────────────────

    /// Identifiers of all open compliance issues. Several transfers sharing
    /// an id collapse into one entry.
    pub fn unsolved_issue_ids(&self) -> HashSet<u64> {
        self.transactions
            .iter()
            .filter(|tx| tx.has_open_issue())
            .filter_map(|tx| tx.issue_id)
            .collect()
    }

    /// Messages of all solved compliance issues, in document order. Transfers
    /// with no attached message contribute nothing.
    pub fn solved_issue_messages(&self) -> Vec<&str> {
        self.transactions
            .iter()
            .filter(|tx| tx.issue_solved)
            .filter_map(|tx| tx.issue_message.as_deref())
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
