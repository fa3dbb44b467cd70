//! Core normalization and statement engine for ledgerlens
//!
//! This crate turns the heterogeneous account records a ledger/banking
//! API returns into a single canonical representation, and derives the
//! views a dashboard renders from it: balance-sheet and income-statement
//! totals, financial ratios, and predicate-filtered drill-down subsets.
//! Every component is a pure function over immutable inputs; a refresh
//! derives a wholly new snapshot rather than mutating the previous one.

#![warn(clippy::all)]
#![warn(missing_docs)]

/// Module for the schema-loose raw record layer and boundary validation
pub mod record;

/// Module for ordered multi-path field resolution
pub mod resolve;

/// Module for account category classification
pub mod classify;

/// Module for canonical account derivation
pub mod account;

/// Module for predicate filtering and drill-down views
pub mod filters;

/// Module for statement aggregation
pub mod statement;

/// Module for financial ratio calculation
pub mod ratios;

/// Module for the full raw-to-views pipeline
pub mod pipeline;

/// Module for refresh sequencing
pub mod refresh;

// Re-export main types
pub use account::{canonicalize, CanonicalAccount, CurrencyDescriptor};
pub use classify::{classify, AccountCategory};
pub use filters::{
    by_balance_range, by_entity, by_ledger, by_type, filter_accounts, filter_records,
    BalanceRangeFilter, FieldPredicate, FilterChain, FilteredAccounts, RecordFilter,
};
pub use pipeline::{Pipeline, Snapshot};
pub use ratios::{compute_ratios, Ratio, RatioSet};
pub use record::{
    parse_accounts, parse_ledgers, RawAccountRecord, RawLedgerRecord, RecordError, RecordResult,
};
pub use refresh::{RefreshSequencer, RefreshToken};
pub use statement::{aggregate, Statement};

// Re-export for convenience
pub use ledgerlens_math::{FormatConfig, ScaleConfig};
