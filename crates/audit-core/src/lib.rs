//! Shared domain layer for Ledger Audit.
//!
//! Holds the transaction record itself, the error type used across the
//! workspace, CLI settings, and the formatting helpers the report renderer
//! relies on.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{AuditError, Result};
pub use models::Transaction;
