//! Account category classification
//!
//! Maps resolved raw type strings onto the closed category enumeration.
//! Classification is total: any unknown or unresolved type falls back to
//! [`AccountCategory::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of account categories used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountCategory {
    /// Asset account (balance sheet)
    Asset,
    /// Liability account (balance sheet)
    Liability,
    /// Equity account (balance sheet)
    Equity,
    /// Revenue account (income statement)
    Revenue,
    /// Expense account (income statement)
    Expense,
    /// Contingent account, excluded from statement totals
    Contingent,
    /// Memo account, excluded from statement totals
    Memo,
    /// Anything that did not classify
    Other,
}

impl AccountCategory {
    /// All categories, in display order
    pub const ALL: [AccountCategory; 8] = [
        AccountCategory::Asset,
        AccountCategory::Liability,
        AccountCategory::Equity,
        AccountCategory::Revenue,
        AccountCategory::Expense,
        AccountCategory::Contingent,
        AccountCategory::Memo,
        AccountCategory::Other,
    ];

    /// The canonical upper-case tag for this category
    pub fn tag(self) -> &'static str {
        match self {
            AccountCategory::Asset => "ASSET",
            AccountCategory::Liability => "LIABILITY",
            AccountCategory::Equity => "EQUITY",
            AccountCategory::Revenue => "REVENUE",
            AccountCategory::Expense => "EXPENSE",
            AccountCategory::Contingent => "CONTINGENT",
            AccountCategory::Memo => "MEMO",
            AccountCategory::Other => "OTHER",
        }
    }

    /// Whether this category contributes to a named statement total
    pub fn is_statement_category(self) -> bool {
        matches!(
            self,
            AccountCategory::Asset
                | AccountCategory::Liability
                | AccountCategory::Equity
                | AccountCategory::Revenue
                | AccountCategory::Expense
        )
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classify a resolved type string.
///
/// Comparison is case-insensitive; surrounding whitespace is ignored.
/// `None` (the unresolved marker) and unknown tags classify as `Other`.
pub fn classify(resolved_type: Option<&str>) -> AccountCategory {
    let Some(raw) = resolved_type else {
        return AccountCategory::Other;
    };

    match raw.trim().to_ascii_uppercase().as_str() {
        "ASSET" => AccountCategory::Asset,
        "LIABILITY" => AccountCategory::Liability,
        "EQUITY" => AccountCategory::Equity,
        "REVENUE" => AccountCategory::Revenue,
        "EXPENSE" => AccountCategory::Expense,
        "CONTINGENT" => AccountCategory::Contingent,
        "MEMO" => AccountCategory::Memo,
        _ => AccountCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_tags() {
        assert_eq!(classify(Some("ASSET")), AccountCategory::Asset);
        assert_eq!(classify(Some("LIABILITY")), AccountCategory::Liability);
        assert_eq!(classify(Some("EQUITY")), AccountCategory::Equity);
        assert_eq!(classify(Some("REVENUE")), AccountCategory::Revenue);
        assert_eq!(classify(Some("EXPENSE")), AccountCategory::Expense);
        assert_eq!(classify(Some("CONTINGENT")), AccountCategory::Contingent);
        assert_eq!(classify(Some("MEMO")), AccountCategory::Memo);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify(Some("asset")), AccountCategory::Asset);
        assert_eq!(classify(Some("Revenue")), AccountCategory::Revenue);
        assert_eq!(classify(Some(" expense ")), AccountCategory::Expense);
    }

    #[test]
    fn test_classify_unknown_defaults_to_other() {
        assert_eq!(classify(Some("FOO")), AccountCategory::Other);
        assert_eq!(classify(Some("")), AccountCategory::Other);
        assert_eq!(classify(None), AccountCategory::Other);
    }

    #[test]
    fn test_statement_categories() {
        assert!(AccountCategory::Asset.is_statement_category());
        assert!(AccountCategory::Expense.is_statement_category());
        assert!(!AccountCategory::Contingent.is_statement_category());
        assert!(!AccountCategory::Memo.is_statement_category());
        assert!(!AccountCategory::Other.is_statement_category());
    }

    #[test]
    fn test_category_serializes_as_tag() {
        let json = serde_json::to_string(&AccountCategory::Asset).unwrap();
        assert_eq!(json, "\"ASSET\"");
    }
}
