//! Decimal scaling and display formatting for ledgerlens
//!
//! This crate provides the numeric foundation for the statement engine:
//! exact conversion of integer minor-unit balances into decimal major
//! units, and financial-statement display formatting (thousands grouping,
//! parenthesized negatives, explicit "N/A" rendering).

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod formatting;
pub mod scale;

// Re-export main types
pub use formatting::{format_decimal, FormatConfig, NegativeStyle, NOT_AVAILABLE};
pub use scale::{ScaleConfig, ScaleError, ScaleResult, DEFAULT_CURRENCY_CODE, DEFAULT_SCALE};

// Re-export for convenience
pub use rust_decimal::Decimal;
