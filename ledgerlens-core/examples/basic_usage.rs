//! Basic usage example for ledgerlens-core

use ledgerlens_core::filters::{by_type, filter_accounts};
use ledgerlens_core::{AccountCategory, FilterChain, Pipeline};
use ledgerlens_math::formatting::{format_decimal, FormatConfig};
use serde_json::json;

fn main() {
    // The decoded response of the transaction API: heterogeneous records
    // where the same fact lives at different locations
    let response = json!([
        {"account_id": "a-1", "name": "Cash", "account_type": "ASSET",
         "r_currency": {"code": "USD", "scale": 2}, "ledger_id": "L-1", "balance": 100000},
        {"account_id": "l-1", "name": "Payables", "account_code": {"type": "LIABILITY"},
         "enriched_ledger": {"ledger_id": "L-1"}, "currency_code": "USD", "balance": 40000},
        {"account_id": "r-1", "name": "Revenue", "type": "revenue",
         "ledger_id": "L-1", "balance": 20000},
    ]);

    let snapshot = Pipeline::new()
        .run(&response, Some("L-1"))
        .expect("input is a JSON array");

    let money = FormatConfig::new().with_precision(2).with_symbol("$");
    println!("Assets:       {}", format_decimal(Some(snapshot.statement.asset_total), &money));
    println!("Liabilities:  {}", format_decimal(Some(snapshot.statement.liability_total), &money));
    println!("Net income:   {}", format_decimal(Some(snapshot.statement.net_income), &money));
    println!("Total equity: {}", format_decimal(Some(snapshot.statement.total_equity), &money));

    let ratios = snapshot.ratios.rounded(2);
    println!("Current ratio: {}", ratios.current_ratio);
    println!("Net margin:    {}%", ratios.net_margin);

    // Drill down into the asset accounts
    let chain = FilterChain::new().add_filter(by_type(AccountCategory::Asset));
    let view = filter_accounts(&snapshot.accounts, &chain);
    println!("Drill-down [{}]:", view.badges.join(", "));
    for account in view.accounts {
        println!(
            "  {} {}",
            account.name,
            format_decimal(account.decimal_balance, &money)
        );
    }
}
