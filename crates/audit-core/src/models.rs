use serde::{Deserialize, Serialize};

/// A single money transfer read from the transactions document.
///
/// Records are immutable after loading. A transfer may carry a compliance
/// issue, represented by the three `issue_*` fields; when no issue is
/// attached, `issue_id` and `issue_message` are absent and `issue_solved`
/// defaults to `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Money transfer number. Not required to be unique within a document.
    pub mtn: u64,
    /// Transferred amount. Non-negative by convention of the source data.
    pub amount: f64,
    /// Full name of the sending client. Compared case-sensitively.
    pub sender_full_name: String,
    /// Age of the sending client. Not consulted by any query; preserved for
    /// forward compatibility.
    #[serde(default)]
    pub sender_age: u32,
    /// Full name of the receiving client. Compared case-sensitively.
    pub beneficiary_full_name: String,
    /// Age of the receiving client. Not consulted by any query.
    #[serde(default)]
    pub beneficiary_age: u32,
    /// Identifier of the attached compliance issue, if any. Several transfers
    /// may reference the same issue.
    #[serde(default)]
    pub issue_id: Option<u64>,
    /// Whether the attached issue has been resolved. `true` when no issue is
    /// attached.
    #[serde(default = "default_issue_solved")]
    pub issue_solved: bool,
    /// Free-form description of the attached compliance issue, if any.
    #[serde(default)]
    pub issue_message: Option<String>,
}

impl Transaction {
    /// Whether this transfer carries a compliance issue that is still open.
    pub fn has_open_issue(&self) -> bool {
        !self.issue_solved
    }
}

fn default_issue_solved() -> bool {
    true
}

// ── Tests ─────────────────────────────────────────────────────────────────────
