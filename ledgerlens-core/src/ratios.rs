//! Financial ratio calculation
//!
//! Derives the named ratios from an aggregated statement. Each ratio is
//! independent: a zero denominator turns that ratio into the explicit
//! [`Ratio::NotApplicable`] sentinel without affecting the others. The
//! calculator exposes unrounded values; display rounding is a separate
//! caller-side step via [`Ratio::rounded`].

use ledgerlens_math::{Decimal, NOT_AVAILABLE};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::statement::Statement;

/// A ratio value or the explicit not-applicable sentinel.
///
/// The sentinel is distinguishable from a real zero: a statement with no
/// liabilities has no current ratio, not a current ratio of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ratio {
    /// A finite computed value
    Value(Decimal),
    /// Denominator was zero
    NotApplicable,
}

impl Ratio {
    /// The computed value, when applicable
    pub fn value(self) -> Option<Decimal> {
        match self {
            Ratio::Value(value) => Some(value),
            Ratio::NotApplicable => None,
        }
    }

    /// Whether a value was computable
    pub fn is_applicable(self) -> bool {
        matches!(self, Ratio::Value(_))
    }

    /// Display-rounding step: round to `dp` decimal places
    pub fn rounded(self, dp: u32) -> Ratio {
        match self {
            Ratio::Value(value) => Ratio::Value(value.round_dp(dp)),
            Ratio::NotApplicable => Ratio::NotApplicable,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Value(value) => write!(f, "{}", value),
            Ratio::NotApplicable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// The named ratios derived from one statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioSet {
    /// Assets over liabilities
    pub current_ratio: Ratio,
    /// Liabilities over total equity
    pub debt_to_equity: Ratio,
    /// Net income over revenue, as a percentage
    pub net_margin: Ratio,
}

impl RatioSet {
    /// Round every applicable ratio to `dp` decimal places
    pub fn rounded(self, dp: u32) -> RatioSet {
        RatioSet {
            current_ratio: self.current_ratio.rounded(dp),
            debt_to_equity: self.debt_to_equity.rounded(dp),
            net_margin: self.net_margin.rounded(dp),
        }
    }
}

/// Zero-guarded division
fn ratio_of(numerator: Decimal, denominator: Decimal) -> Ratio {
    match numerator.checked_div(denominator) {
        Some(value) => Ratio::Value(value),
        None => Ratio::NotApplicable,
    }
}

/// Compute the ratio set for a statement.
///
/// `current_ratio = assets / liabilities`,
/// `debt_to_equity = liabilities / total equity`,
/// `net_margin = net income / revenue × 100`.
pub fn compute_ratios(statement: &Statement) -> RatioSet {
    let net_margin = match ratio_of(statement.net_income, statement.revenue_total) {
        Ratio::Value(fraction) => match fraction.checked_mul(Decimal::ONE_HUNDRED) {
            Some(percent) => Ratio::Value(percent),
            None => Ratio::NotApplicable,
        },
        Ratio::NotApplicable => Ratio::NotApplicable,
    };

    RatioSet {
        current_ratio: ratio_of(statement.asset_total, statement.liability_total),
        debt_to_equity: ratio_of(statement.liability_total, statement.total_equity),
        net_margin,
    }
}
