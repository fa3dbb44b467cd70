//! Field resolution over ambiguous raw records
//!
//! Each logical attribute of an account can live at several candidate
//! locations on the wire. Resolution is an ordered list of accessor
//! functions evaluated first-present-wins, so the order itself is a
//! testable value rather than an inline conditional chain. An attribute
//! with no present candidate resolves to `None`; callers apply their own
//! documented defaults.

use crate::record::{CodeField, IdValue, RawAccountRecord, RawCurrency};

/// Where an account's currency information was resolved from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurrencySource<'a> {
    /// A structured currency descriptor carrying code and scale
    Descriptor(&'a RawCurrency),
    /// A bare code string; the scale falls back to the configured default
    BareCode(&'a str),
}

/// Evaluate an ordered candidate list, returning the first present value
pub fn first_match<'a, T>(
    record: &'a RawAccountRecord,
    candidates: &[fn(&'a RawAccountRecord) -> Option<T>],
) -> Option<T> {
    candidates.iter().find_map(|probe| probe(record))
}

/// Resolve the raw account type string.
///
/// Order: `account_type`, `type`, `account_code.type` (object form),
/// `code.type`.
pub fn resolve_account_type<'a>(record: &'a RawAccountRecord) -> Option<&'a str> {
    let candidates: [fn(&'a RawAccountRecord) -> Option<&'a str>; 4] = [
        |r| r.account_type.as_deref(),
        |r| r.type_attr.as_deref(),
        |r| r.account_code.as_ref().and_then(CodeField::type_tag),
        |r| r.code.as_ref().and_then(CodeField::type_tag),
    ];
    first_match(record, &candidates)
}

/// Resolve the currency source for an account.
///
/// Order: `r_currency`, `currency`, `ledger.r_currency`,
/// `enriched_ledger.r_currency`, then the bare `currency_code` string.
pub fn resolve_currency<'a>(record: &'a RawAccountRecord) -> Option<CurrencySource<'a>> {
    let candidates: [fn(&'a RawAccountRecord) -> Option<CurrencySource<'a>>; 5] = [
        |r| r.r_currency.as_ref().map(CurrencySource::Descriptor),
        |r| r.currency.as_ref().map(CurrencySource::Descriptor),
        |r| {
            r.ledger
                .as_ref()
                .and_then(|l| l.r_currency.as_ref())
                .map(CurrencySource::Descriptor)
        },
        |r| {
            r.enriched_ledger
                .as_ref()
                .and_then(|l| l.r_currency.as_ref())
                .map(CurrencySource::Descriptor)
        },
        |r| r.currency_code.as_deref().map(CurrencySource::BareCode),
    ];
    first_match(record, &candidates)
}

/// Resolve the owning ledger identifier.
///
/// Order: `ledger_id`, `enriched_ledger.ledger_id`.
pub fn resolve_ledger_id<'a>(record: &'a RawAccountRecord) -> Option<&'a IdValue> {
    let candidates: [fn(&'a RawAccountRecord) -> Option<&'a IdValue>; 2] = [
        |r| r.ledger_id.as_ref(),
        |r| r.enriched_ledger.as_ref().and_then(|l| l.ledger_id.as_ref()),
    ];
    first_match(record, &candidates)
}

/// Resolve the owning entity identifier.
///
/// Order: `entity_id`, `enriched_ledger.entity_id`, `entity.entity_id`.
pub fn resolve_entity_id<'a>(record: &'a RawAccountRecord) -> Option<&'a IdValue> {
    let candidates: [fn(&'a RawAccountRecord) -> Option<&'a IdValue>; 3] = [
        |r| r.entity_id.as_ref(),
        |r| r.enriched_ledger.as_ref().and_then(|l| l.entity_id.as_ref()),
        |r| r.entity.as_ref().and_then(|e| e.entity_id.as_ref()),
    ];
    first_match(record, &candidates)
}

/// Resolve the account's own identifier.
///
/// Order: `account_id`, `id`.
pub fn resolve_account_id<'a>(record: &'a RawAccountRecord) -> Option<&'a IdValue> {
    let candidates: [fn(&'a RawAccountRecord) -> Option<&'a IdValue>; 2] =
        [|r| r.account_id.as_ref(), |r| r.id.as_ref()];
    first_match(record, &candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawAccountRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_account_type_first_candidate_wins() {
        let r = record(json!({
            "account_type": "ASSET",
            "account_code": {"type": "LIABILITY"},
        }));
        assert_eq!(resolve_account_type(&r), Some("ASSET"));
    }

    #[test]
    fn test_account_type_falls_through_in_order() {
        let r = record(json!({"type": "equity", "code": {"type": "MEMO"}}));
        assert_eq!(resolve_account_type(&r), Some("equity"));

        let r = record(json!({"code": {"type": "MEMO"}}));
        assert_eq!(resolve_account_type(&r), Some("MEMO"));
    }

    #[test]
    fn test_account_type_ignores_string_code() {
        // A bare code string carries no type information
        let r = record(json!({"code": "1000"}));
        assert_eq!(resolve_account_type(&r), None);
    }

    #[test]
    fn test_account_type_unresolved() {
        assert_eq!(resolve_account_type(&RawAccountRecord::default()), None);
    }

    #[test]
    fn test_currency_prefers_direct_descriptor() {
        let r = record(json!({
            "r_currency": {"code": "EUR", "scale": 2},
            "currency_code": "USD",
        }));
        match resolve_currency(&r) {
            Some(CurrencySource::Descriptor(c)) => assert_eq!(c.code.as_deref(), Some("EUR")),
            other => panic!("unexpected source: {:?}", other),
        }
    }

    #[test]
    fn test_currency_reaches_enriched_ledger() {
        let r = record(json!({
            "enriched_ledger": {"r_currency": {"code": "GBP", "scale": 2}},
        }));
        match resolve_currency(&r) {
            Some(CurrencySource::Descriptor(c)) => assert_eq!(c.code.as_deref(), Some("GBP")),
            other => panic!("unexpected source: {:?}", other),
        }
    }

    #[test]
    fn test_currency_bare_code_is_last_resort() {
        let r = record(json!({"currency_code": "CHF"}));
        assert_eq!(
            resolve_currency(&r),
            Some(CurrencySource::BareCode("CHF"))
        );
    }

    #[test]
    fn test_ledger_id_order() {
        let r = record(json!({
            "ledger_id": "L-1",
            "enriched_ledger": {"ledger_id": "L-2"},
        }));
        assert_eq!(resolve_ledger_id(&r).unwrap().as_canonical(), "L-1");

        let r = record(json!({"enriched_ledger": {"ledger_id": "L-2"}}));
        assert_eq!(resolve_ledger_id(&r).unwrap().as_canonical(), "L-2");
    }

    #[test]
    fn test_entity_id_order() {
        let r = record(json!({
            "enriched_ledger": {"entity_id": "E-2"},
            "entity": {"entity_id": "E-3"},
        }));
        assert_eq!(resolve_entity_id(&r).unwrap().as_canonical(), "E-2");

        let r = record(json!({"entity": {"entity_id": "E-3"}}));
        assert_eq!(resolve_entity_id(&r).unwrap().as_canonical(), "E-3");
    }

    #[test]
    fn test_account_id_order() {
        let r = record(json!({"account_id": 7, "id": 8}));
        assert_eq!(resolve_account_id(&r).unwrap().as_canonical(), "7");

        let r = record(json!({"id": 8}));
        assert_eq!(resolve_account_id(&r).unwrap().as_canonical(), "8");
    }
}
