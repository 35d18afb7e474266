#![doc(issue_tracker_base_url = "https://github.com/siegfried-screener/siegfried/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for the Siegfried value screener.
//!
//! This crate provides the foundational abstractions shared by the rest of the
//! workspace: label-indexed financial statement tables, quote snapshots, the
//! error type, and the [`FundamentalsProvider`] trait through which every
//! computation reaches its data.

/// The version of the siegfried-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod labels;
pub mod provider;
pub mod types;

// Re-exports
pub use error::{Result, SiegfriedError};
pub use provider::{CompanyFixture, FundamentalsProvider, InMemoryProvider};
pub use types::{
    Date, FinancialStatements, Frequency, QuoteSnapshot, StatementColumn, StatementTable, Symbol,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
