//! Raw record layer for the upstream ledger and transaction APIs
//!
//! Records arrive as already-decoded JSON and are schema-loose: the same
//! fact (account type, currency, scale, owning entity, owning ledger) may
//! appear at any of several optional, differently-named, differently-nested
//! locations. Every known location is modeled here as an explicit
//! `Option` field so the resolver in [`crate::resolve`] can enumerate
//! them exhaustively instead of probing an open map.
//!
//! The only hard failure at this boundary is a top-level value that is
//! not a JSON array. Individual malformed records are skipped with a
//! warning so partial data still produces a statement.

use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur at the record boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Top-level input was not a JSON array of records
    #[error("expected a JSON array of records, found {0}")]
    NotAnArray(&'static str),
}

/// Result type for record boundary operations
pub type RecordResult<T> = Result<T, RecordError>;

/// An identifier that upstream services serialize either as a string or
/// as a bare JSON number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    /// String identifier
    Text(String),
    /// Numeric identifier
    Number(i64),
}

impl IdValue {
    /// Normalize the identifier to its canonical string form
    pub fn as_canonical(&self) -> String {
        match self {
            IdValue::Text(text) => text.clone(),
            IdValue::Number(number) => number.to_string(),
        }
    }
}

/// An account code attribute, which upstream serializes either as a bare
/// code string or as an object whose `type` field classifies the account
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CodeField {
    /// Object form carrying a type tag
    Object(CodeObject),
    /// Bare code string (carries no type information)
    Code(String),
}

impl CodeField {
    /// The type tag, present only in the object form
    pub fn type_tag(&self) -> Option<&str> {
        match self {
            CodeField::Object(object) => object.account_type.as_deref(),
            CodeField::Code(_) => None,
        }
    }
}

/// Object form of an account code attribute
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CodeObject {
    /// Account type tag
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    /// The code itself
    pub code: Option<String>,
}

/// A currency descriptor as it appears on the wire
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawCurrency {
    /// ISO-style currency code
    pub code: Option<String>,
    /// Number of decimal places separating minor from major units
    pub scale: Option<u32>,
}

/// A ledger sub-object embedded in an account record, either directly or
/// in "enriched" form
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawLedgerEmbed {
    /// Owning ledger identifier
    pub ledger_id: Option<IdValue>,
    /// Owning entity identifier
    pub entity_id: Option<IdValue>,
    /// Ledger-level currency descriptor
    pub r_currency: Option<RawCurrency>,
    /// Ledger display name
    pub name: Option<String>,
}

/// An entity sub-object embedded in an account record
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawEntityEmbed {
    /// Entity identifier
    pub entity_id: Option<IdValue>,
    /// Entity display name
    pub name: Option<String>,
}

/// An account record exactly as the transaction API returns it.
///
/// Every field is optional; which ones a given record carries varies by
/// upstream version and enrichment level. The balance is kept as a raw
/// JSON value so a non-numeric balance degrades to "N/A" instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawAccountRecord {
    /// Primary account identifier
    pub account_id: Option<IdValue>,
    /// Alternate identifier some responses use instead
    pub id: Option<IdValue>,
    /// Account display name
    pub name: Option<String>,

    /// Direct type attribute
    pub account_type: Option<String>,
    /// Alternate direct type attribute
    #[serde(rename = "type")]
    pub type_attr: Option<String>,
    /// Code attribute, string or object form
    pub account_code: Option<CodeField>,
    /// Alternate code attribute
    pub code: Option<CodeField>,

    /// Direct currency descriptor
    pub r_currency: Option<RawCurrency>,
    /// Alternate direct currency descriptor
    pub currency: Option<RawCurrency>,
    /// Bare currency code, the last-resort currency source
    pub currency_code: Option<String>,

    /// Embedded ledger sub-object
    pub ledger: Option<RawLedgerEmbed>,
    /// Enriched ledger sub-object
    pub enriched_ledger: Option<RawLedgerEmbed>,
    /// Embedded entity sub-object
    pub entity: Option<RawEntityEmbed>,

    /// Direct owning-ledger identifier
    pub ledger_id: Option<IdValue>,
    /// Direct owning-entity identifier
    pub entity_id: Option<IdValue>,

    /// Balance in minor units, kept raw to tolerate non-numeric values
    pub balance: Option<Value>,
}

/// A ledger record as the ledger API returns it
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawLedgerRecord {
    /// Ledger identifier
    pub ledger_id: Option<IdValue>,
    /// Ledger display name
    pub name: Option<String>,
    /// Owning entity identifier
    pub entity_id: Option<IdValue>,
    /// Ledger-level currency descriptor
    pub r_currency: Option<RawCurrency>,
    /// Reporting date the ledger snapshot refers to
    pub as_of: Option<NaiveDate>,
}

/// Name of a JSON value's shape, for the boundary error message
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Validate the top-level shape and deserialize the records that parse.
///
/// Non-object elements and records whose fields carry impossible types
/// are skipped with a warning; the remainder is returned in input order.
pub fn parse_accounts(input: &Value) -> RecordResult<Vec<RawAccountRecord>> {
    parse_records(input, "account")
}

/// Same boundary for the ledger API's record list
pub fn parse_ledgers(input: &Value) -> RecordResult<Vec<RawLedgerRecord>> {
    parse_records(input, "ledger")
}

fn parse_records<T>(input: &Value, kind: &str) -> RecordResult<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let items = input
        .as_array()
        .ok_or(RecordError::NotAnArray(json_kind(input)))?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            warn!("skipping non-object {} record at index {}", kind, index);
            continue;
        }
        match serde_json::from_value::<T>(item.clone()) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!("skipping malformed {} record at index {}: {}", kind, index, err);
            }
        }
    }
    Ok(records)
}
