//! Filter chain architecture for drill-down views
//!
//! Composable predicates over JSON-shaped records, following the chain
//! of responsibility pattern: each filter answers `matches`, and a
//! [`FilterChain`] requires every filter to match (sequential
//! application is a logical AND). Filtering is purely functional and
//! stable: matching records keep their relative input order.
//!
//! Predicates address fields by dotted path (`enriched_ledger.ledger_id`),
//! so the same engine drills into raw records and serialized canonical
//! accounts alike. A record missing any path segment simply does not
//! match; nothing here can fail.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::account::CanonicalAccount;
use crate::classify::AccountCategory;

/// Core filter trait for record predicates
pub trait RecordFilter: Send + Sync {
    /// Whether the record should be included
    fn matches(&self, record: &Value) -> bool;

    /// Human-readable description, used for removable filter badges
    fn description(&self) -> String;
}

/// Composite filter applying every contained filter (logical AND)
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn RecordFilter>>,
}

impl FilterChain {
    /// Create a new empty filter chain
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Add a filter to the chain
    pub fn add_filter(mut self, filter: impl RecordFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Check whether a record passes all filters in the chain
    pub fn matches(&self, record: &Value) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }

    /// Descriptions of all filters, in application order
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }

    /// Number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Walk a dotted path segment by segment
fn lookup_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Render a scalar leaf as comparison text; structured values have no
/// text form and never match
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read a numeric leaf as a decimal, accepting both JSON numbers (raw
/// records) and decimal strings (serialized canonical accounts)
fn decimal_at(record: &Value, path: &str) -> Option<Decimal> {
    match lookup_path(record, path)? {
        Value::Number(number) => number
            .as_i64()
            .map(Decimal::from)
            .or_else(|| number.as_u64().map(Decimal::from))
            .or_else(|| number.as_f64().and_then(Decimal::from_f64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// A single-field match condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPredicate {
    /// Dotted path to the field
    pub field: String,
    /// Expected value
    pub value: Value,
    /// Exact equality versus substring containment
    pub exact: bool,
}

impl FieldPredicate {
    /// Case-insensitive equality on the field's text form
    pub fn exact(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { field: field.into(), value: value.into(), exact: true }
    }

    /// Case-insensitive substring containment on the field's text form
    pub fn contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { field: field.into(), value: value.into(), exact: false }
    }
}

impl RecordFilter for FieldPredicate {
    fn matches(&self, record: &Value) -> bool {
        let Some(actual) = lookup_path(record, &self.field).and_then(scalar_text) else {
            return false;
        };
        let Some(expected) = scalar_text(&self.value) else {
            return false;
        };

        if self.exact {
            actual.eq_ignore_ascii_case(&expected)
        } else {
            actual.to_lowercase().contains(&expected.to_lowercase())
        }
    }

    fn description(&self) -> String {
        let expected = scalar_text(&self.value).unwrap_or_default();
        if self.exact {
            format!("{} = {}", self.field, expected)
        } else {
            format!("{} contains {}", self.field, expected)
        }
    }
}

/// Inclusive numeric range condition on a balance field.
///
/// Records whose balance is absent or non-numeric never match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRangeFilter {
    /// Dotted path to the numeric field
    pub field: String,
    /// Inclusive lower bound
    pub min: Option<Decimal>,
    /// Inclusive upper bound
    pub max: Option<Decimal>,
}

impl BalanceRangeFilter {
    /// Range over an arbitrary numeric field
    pub fn new(field: impl Into<String>, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self { field: field.into(), min, max }
    }
}

impl RecordFilter for BalanceRangeFilter {
    fn matches(&self, record: &Value) -> bool {
        let Some(balance) = decimal_at(record, &self.field) else {
            return false;
        };
        if let Some(min) = self.min {
            if balance < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if balance > max {
                return false;
            }
        }
        true
    }

    fn description(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{} between {} and {}", self.field, min, max),
            (Some(min), None) => format!("{} >= {}", self.field, min),
            (None, Some(max)) => format!("{} <= {}", self.field, max),
            (None, None) => format!("any {}", self.field),
        }
    }
}

/// Drill-down filter on the classified category of a canonical account
pub fn by_type(category: AccountCategory) -> FieldPredicate {
    FieldPredicate::exact("category", category.tag())
}

/// Drill-down filter on the owning ledger of a canonical account
pub fn by_ledger(ledger_id: &str) -> FieldPredicate {
    FieldPredicate::exact("ledger_id", ledger_id)
}

/// Drill-down filter on the owning entity of a canonical account
pub fn by_entity(entity_id: &str) -> FieldPredicate {
    FieldPredicate::exact("entity_id", entity_id)
}

/// Drill-down filter on the decimal balance of a canonical account
pub fn by_balance_range(min: Option<Decimal>, max: Option<Decimal>) -> BalanceRangeFilter {
    BalanceRangeFilter::new("decimal_balance", min, max)
}

/// Apply a chain to raw JSON records, preserving input order
pub fn filter_records<'a>(records: &'a [Value], chain: &FilterChain) -> Vec<&'a Value> {
    records.iter().filter(|r| chain.matches(r)).collect()
}

/// A filtered subset of canonical accounts, tagged with the badge text
/// of every predicate that produced it
#[derive(Debug, Clone)]
pub struct FilteredAccounts<'a> {
    /// Badge text for each active filter, in application order
    pub badges: Vec<String>,
    /// Matching accounts in their original relative order
    pub accounts: Vec<&'a CanonicalAccount>,
}

/// Apply a chain to canonical accounts, preserving input order
pub fn filter_accounts<'a>(
    accounts: &'a [CanonicalAccount],
    chain: &FilterChain,
) -> FilteredAccounts<'a> {
    let accounts = accounts
        .iter()
        .filter(|account| chain.matches(&account.to_record()))
        .collect();
    FilteredAccounts { badges: chain.descriptions(), accounts }
}
