//! The full raw-records-to-views pass
//!
//! One pipeline run is what the surrounding dashboard executes per
//! refresh: validate the top-level shape, canonicalize every record,
//! aggregate the selected ledger and derive its ratios, and package
//! everything in a single immutable [`Snapshot`]. The pipeline holds no
//! state between runs; identical input always produces an identical
//! snapshot.

use ledgerlens_math::ScaleConfig;
use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::account::{canonicalize, CanonicalAccount};
use crate::ratios::{compute_ratios, RatioSet};
use crate::record::{parse_accounts, RecordResult};
use crate::statement::{aggregate, Statement};

/// One immutable result of a pipeline run.
///
/// Consumers always read the most recently published snapshot whole;
/// it is never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Every canonical account derived from the input, in input order
    pub accounts: Vec<CanonicalAccount>,
    /// The ledger the statement was computed for, `None` for all
    pub selected_ledger: Option<String>,
    /// Aggregated totals for the selected ledger
    pub statement: Statement,
    /// Ratios derived from the statement
    pub ratios: RatioSet,
}

/// The normalization and aggregation pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    scale: ScaleConfig,
}

impl Pipeline {
    /// Create a pipeline with the standard defaults
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a pipeline with an injected scale configuration
    pub fn with_config(scale: ScaleConfig) -> Self {
        Self { scale }
    }

    /// Run the full pass over a decoded API response.
    ///
    /// `raw_accounts` must be the JSON array the transaction API
    /// returned; any other top-level shape is the one reportable error.
    /// Per-record anomalies degrade to defaults and never abort the run.
    pub fn run(
        &self,
        raw_accounts: &Value,
        selected_ledger: Option<&str>,
    ) -> RecordResult<Snapshot> {
        let records = parse_accounts(raw_accounts)?;

        let accounts: Vec<CanonicalAccount> = records
            .iter()
            .map(|record| canonicalize(record, &self.scale))
            .collect();

        let selected: Vec<CanonicalAccount> = match selected_ledger {
            Some(ledger_id) => accounts
                .iter()
                .filter(|account| account.ledger_id.as_deref() == Some(ledger_id))
                .cloned()
                .collect(),
            None => accounts.clone(),
        };

        let statement = aggregate(&selected);
        let ratios = compute_ratios(&statement);

        debug!(
            "pipeline run: {} canonical accounts, {} in statement scope",
            accounts.len(),
            selected.len()
        );

        Ok(Snapshot {
            accounts,
            selected_ledger: selected_ledger.map(str::to_string),
            statement,
            ratios,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::AccountCategory;
    use crate::record::RecordError;
    use serde_json::json;

    fn sample_input() -> Value {
        json!([
            {"account_id": "a-1", "account_type": "ASSET", "ledger_id": "L-1", "balance": 100000},
            {"account_id": "l-1", "account_type": "LIABILITY", "ledger_id": "L-1", "balance": 40000},
            {"account_id": "r-1", "account_type": "REVENUE", "ledger_id": "L-1", "balance": 20000},
            {"account_id": "a-2", "account_type": "ASSET", "ledger_id": "L-2", "balance": 999},
        ])
    }

    #[test]
    fn test_full_run_for_one_ledger() {
        let snapshot = Pipeline::new().run(&sample_input(), Some("L-1")).unwrap();

        // All accounts stay in the canonical collection
        assert_eq!(snapshot.accounts.len(), 4);
        // Only L-1 accounts reach the statement
        assert_eq!(snapshot.statement.asset_total.to_string(), "1000.00");
        assert_eq!(snapshot.statement.liability_total.to_string(), "400.00");
        assert_eq!(snapshot.statement.net_income.to_string(), "200.00");
        assert_eq!(snapshot.statement.total_equity.to_string(), "200.00");
        assert_eq!(
            snapshot.ratios.current_ratio.value().unwrap().to_string(),
            "2.5"
        );
    }

    #[test]
    fn test_no_ledger_selection_covers_everything() {
        let snapshot = Pipeline::new().run(&sample_input(), None).unwrap();
        assert_eq!(snapshot.statement.asset_total.to_string(), "1009.99");
        assert_eq!(snapshot.selected_ledger, None);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let pipeline = Pipeline::new();
        let first = pipeline.run(&sample_input(), Some("L-1")).unwrap();
        let second = pipeline.run(&sample_input(), Some("L-1")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_array_input_is_the_only_error() {
        let err = Pipeline::new().run(&json!({"data": []}), None).unwrap_err();
        assert_eq!(err, RecordError::NotAnArray("an object"));
    }

    #[test]
    fn test_malformed_records_degrade() {
        let input = json!([
            {"account_id": "a-1", "account_type": "ASSET", "balance": 100},
            "not a record",
            {"account_id": "x-1", "account_type": "FOO", "balance": "N/A"},
        ]);

        let snapshot = Pipeline::new().run(&input, None).unwrap();
        assert_eq!(snapshot.accounts.len(), 2);
        assert_eq!(snapshot.accounts[1].category, AccountCategory::Other);
        assert_eq!(snapshot.statement.asset_total.to_string(), "1.00");
    }

    #[test]
    fn test_empty_input_produces_empty_snapshot() {
        let snapshot = Pipeline::new().run(&json!([]), Some("L-1")).unwrap();
        assert!(snapshot.accounts.is_empty());
        assert!(snapshot.statement.asset_total.is_zero());
        assert!(!snapshot.ratios.current_ratio.is_applicable());
    }
}
