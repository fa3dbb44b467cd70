//! Statement aggregation
//!
//! Folds a set of canonical accounts for one ledger into per-category
//! decimal totals plus the two derived scalars, net income and total
//! equity. Only the five statement categories contribute to named
//! totals; contingent, memo and unclassified accounts stay out of the
//! totals but remain in the canonical collection for drill-down display.
//!
//! Totals use exact decimal addition, so the sum is independent of
//! account order and repeated runs over the same input are bit-identical.

use ledgerlens_math::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::CanonicalAccount;
use crate::classify::AccountCategory;

/// Aggregated per-category totals for one ledger
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statement {
    /// Sum of asset balances
    pub asset_total: Decimal,
    /// Sum of liability balances
    pub liability_total: Decimal,
    /// Sum of equity balances
    pub equity_total: Decimal,
    /// Sum of revenue balances
    pub revenue_total: Decimal,
    /// Sum of expense balances
    pub expense_total: Decimal,
    /// `revenue_total - expense_total`
    pub net_income: Decimal,
    /// `equity_total + net_income`
    pub total_equity: Decimal,
}

impl Statement {
    /// The named total for a statement category; `None` for categories
    /// that are excluded from statement totals
    pub fn total_for(&self, category: AccountCategory) -> Option<Decimal> {
        match category {
            AccountCategory::Asset => Some(self.asset_total),
            AccountCategory::Liability => Some(self.liability_total),
            AccountCategory::Equity => Some(self.equity_total),
            AccountCategory::Revenue => Some(self.revenue_total),
            AccountCategory::Expense => Some(self.expense_total),
            AccountCategory::Contingent | AccountCategory::Memo | AccountCategory::Other => None,
        }
    }
}

/// Saturating-style add that keeps the running total on overflow rather
/// than aborting the statement
fn accumulate(total: &mut Decimal, value: Decimal) {
    if let Some(sum) = total.checked_add(value) {
        *total = sum;
    } else {
        log::warn!("statement total overflow; dropping contribution {}", value);
    }
}

/// Aggregate canonical accounts into a statement.
///
/// Accounts without a numeric balance contribute nothing; an empty input
/// yields all-zero totals.
pub fn aggregate(accounts: &[CanonicalAccount]) -> Statement {
    let mut statement = Statement::default();

    for account in accounts {
        let Some(balance) = account.decimal_balance else {
            continue;
        };
        match account.category {
            AccountCategory::Asset => accumulate(&mut statement.asset_total, balance),
            AccountCategory::Liability => accumulate(&mut statement.liability_total, balance),
            AccountCategory::Equity => accumulate(&mut statement.equity_total, balance),
            AccountCategory::Revenue => accumulate(&mut statement.revenue_total, balance),
            AccountCategory::Expense => accumulate(&mut statement.expense_total, balance),
            AccountCategory::Contingent | AccountCategory::Memo | AccountCategory::Other => {}
        }
    }

    statement.net_income = statement.revenue_total - statement.expense_total;
    statement.total_equity = statement.equity_total + statement.net_income;
    statement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::canonicalize;
    use crate::record::RawAccountRecord;
    use ledgerlens_math::ScaleConfig;
    use serde_json::json;

    fn account(value: serde_json::Value) -> CanonicalAccount {
        let record: RawAccountRecord = serde_json::from_value(value).unwrap();
        canonicalize(&record, &ScaleConfig::new())
    }

    #[test]
    fn test_aggregation_example() {
        let accounts = vec![
            account(json!({"account_id": "a", "account_type": "ASSET", "balance": 100000})),
            account(json!({"account_id": "l", "account_type": "LIABILITY", "balance": 40000})),
            account(json!({"account_id": "r", "account_type": "REVENUE", "balance": 20000})),
        ];

        let statement = aggregate(&accounts);
        assert_eq!(statement.asset_total.to_string(), "1000.00");
        assert_eq!(statement.liability_total.to_string(), "400.00");
        assert_eq!(statement.revenue_total.to_string(), "200.00");
        assert_eq!(statement.expense_total.to_string(), "0");
        assert_eq!(statement.net_income.to_string(), "200.00");
        assert_eq!(statement.total_equity.to_string(), "200.00");
    }

    #[test]
    fn test_empty_input_yields_zero_totals() {
        let statement = aggregate(&[]);
        assert_eq!(statement, Statement::default());
        assert!(statement.asset_total.is_zero());
        assert!(statement.net_income.is_zero());
    }

    #[test]
    fn test_sum_is_order_independent() {
        let mut accounts = vec![
            account(json!({"account_id": "1", "account_type": "ASSET", "balance": 333})),
            account(json!({"account_id": "2", "account_type": "ASSET", "balance": 10})),
            account(json!({"account_id": "3", "account_type": "ASSET", "balance": 99999999})),
        ];
        let forward = aggregate(&accounts);
        accounts.reverse();
        let backward = aggregate(&accounts);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_excluded_categories_do_not_contribute() {
        let accounts = vec![
            account(json!({"account_id": "c", "account_type": "CONTINGENT", "balance": 5000})),
            account(json!({"account_id": "m", "account_type": "MEMO", "balance": 5000})),
            account(json!({"account_id": "o", "account_type": "FOO", "balance": 5000})),
            account(json!({"account_id": "e", "account_type": "EQUITY", "balance": 5000})),
        ];

        let statement = aggregate(&accounts);
        assert_eq!(statement.equity_total.to_string(), "50.00");
        assert_eq!(statement.asset_total.to_string(), "0");
        assert_eq!(statement.total_equity.to_string(), "50.00");
    }

    #[test]
    fn test_absent_balances_are_skipped() {
        let accounts = vec![
            account(json!({"account_id": "a", "account_type": "ASSET", "balance": "bad"})),
            account(json!({"account_id": "b", "account_type": "ASSET", "balance": 250})),
        ];

        let statement = aggregate(&accounts);
        assert_eq!(statement.asset_total.to_string(), "2.50");
    }

    #[test]
    fn test_net_income_with_expenses() {
        let accounts = vec![
            account(json!({"account_id": "r", "account_type": "REVENUE", "balance": 50000})),
            account(json!({"account_id": "x", "account_type": "EXPENSE", "balance": 20000})),
            account(json!({"account_id": "e", "account_type": "EQUITY", "balance": 10000})),
        ];

        let statement = aggregate(&accounts);
        assert_eq!(statement.net_income.to_string(), "300.00");
        assert_eq!(statement.total_equity.to_string(), "400.00");
    }

    #[test]
    fn test_total_for_lookup() {
        let statement = aggregate(&[account(
            json!({"account_id": "a", "account_type": "ASSET", "balance": 100}),
        )]);
        assert_eq!(
            statement.total_for(AccountCategory::Asset).unwrap().to_string(),
            "1.00"
        );
        assert_eq!(statement.total_for(AccountCategory::Memo), None);
    }
}
