//! Canonical account derivation
//!
//! A [`CanonicalAccount`] is the fully resolved, immutable form of a raw
//! record: one resolution pass picks the account type, currency, scale
//! and owning identifiers via the ordered candidate lists in
//! [`crate::resolve`], converts the minor-unit balance to a decimal, and
//! classifies the type string. Canonical accounts are never mutated;
//! every refresh derives them again from scratch.

use ledgerlens_math::scale::{self, ScaleConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classify::{classify, AccountCategory};
use crate::record::RawAccountRecord;
use crate::resolve::{
    resolve_account_id, resolve_account_type, resolve_currency, resolve_entity_id,
    resolve_ledger_id, CurrencySource,
};

/// A resolved currency: code plus minor-unit scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDescriptor {
    /// Currency code
    pub code: String,
    /// Number of decimal places separating minor from major units
    pub scale: u32,
}

/// The canonical, fully resolved representation of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalAccount {
    /// Account identifier, normalized to a string
    pub id: String,
    /// Display name; falls back to the identifier
    pub name: String,
    /// Classified category
    pub category: AccountCategory,
    /// Balance in major units; `None` when the raw balance was not a
    /// finite number
    pub decimal_balance: Option<Decimal>,
    /// Resolved currency
    pub currency: CurrencyDescriptor,
    /// Owning ledger identifier, when any candidate resolved
    pub ledger_id: Option<String>,
    /// Owning entity identifier, when any candidate resolved
    pub entity_id: Option<String>,
}

impl CanonicalAccount {
    /// View this account as a JSON record for the generic filter engine
    pub fn to_record(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Read a raw balance value as minor units.
///
/// Accepts integer and finite fractional JSON numbers; everything else
/// (strings, booleans, objects, NaN encodings) reads as absent.
fn minor_balance(value: &Value) -> Option<MinorReading> {
    let number = value.as_number()?;
    if let Some(int) = number.as_i64() {
        return Some(MinorReading::Int(int as i128));
    }
    if let Some(int) = number.as_u64() {
        return Some(MinorReading::Int(int as i128));
    }
    number.as_f64().map(MinorReading::Fraction)
}

enum MinorReading {
    Int(i128),
    Fraction(f64),
}

/// Derive the canonical account for one raw record.
///
/// Total over any record shape: unresolved attributes degrade to the
/// defaults carried by `config` (`Other` category, default scale and
/// currency code, absent balance).
pub fn canonicalize(record: &RawAccountRecord, config: &ScaleConfig) -> CanonicalAccount {
    let category = classify(resolve_account_type(record));

    let currency = match resolve_currency(record) {
        Some(CurrencySource::Descriptor(raw)) => CurrencyDescriptor {
            code: raw
                .code
                .clone()
                .unwrap_or_else(|| config.default_currency.clone()),
            scale: raw.scale.unwrap_or(config.default_scale),
        },
        Some(CurrencySource::BareCode(code)) => CurrencyDescriptor {
            code: code.to_string(),
            scale: config.default_scale,
        },
        None => CurrencyDescriptor {
            code: config.default_currency.clone(),
            scale: config.default_scale,
        },
    };

    let decimal_balance = record
        .balance
        .as_ref()
        .and_then(minor_balance)
        .and_then(|reading| match reading {
            MinorReading::Int(minor) => scale::to_decimal(minor, currency.scale),
            MinorReading::Fraction(minor) => scale::from_f64(minor, currency.scale),
        });

    let id = resolve_account_id(record)
        .map(|id| id.as_canonical())
        .unwrap_or_default();
    let name = record.name.clone().unwrap_or_else(|| id.clone());

    CanonicalAccount {
        id,
        name,
        category,
        decimal_balance,
        currency,
        ledger_id: resolve_ledger_id(record).map(|id| id.as_canonical()),
        entity_id: resolve_entity_id(record).map(|id| id.as_canonical()),
    }
}
