//! Display formatting for statement values
//!
//! Renders decimal values the way financial statements conventionally
//! print them: thousands grouping, negatives in parentheses rather than
//! with a leading minus, an optional prepended currency symbol, and an
//! explicit "N/A" for values that never resolved to a number.
//! Formatting is total; no input can make it fail.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rendering used for values that did not resolve to a number
pub const NOT_AVAILABLE: &str = "N/A";

/// How negative values are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    /// Financial-statement convention: `(1,234.00)`
    #[default]
    Parentheses,
    /// Plain arithmetic convention: `-1,234.00`
    LeadingMinus,
}

/// Format configuration for displaying statement values
#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    /// Display precision override (None keeps the value's own scale)
    pub precision: Option<u32>,

    /// Suppress thousands separators
    pub ungrouped: bool,

    /// Negative value rendering
    pub negative_style: NegativeStyle,

    /// Currency symbol prepended to the numeric part
    pub symbol: Option<String>,
}

impl FormatConfig {
    /// Create a configuration with the conventional defaults
    pub fn new() -> Self {
        Default::default()
    }

    /// Round to a fixed number of decimal places before rendering
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Disable thousands grouping
    pub fn ungrouped(mut self) -> Self {
        self.ungrouped = true;
        self
    }

    /// Render negatives with a leading minus instead of parentheses
    pub fn leading_minus(mut self) -> Self {
        self.negative_style = NegativeStyle::LeadingMinus;
        self
    }

    /// Prepend a currency symbol to the numeric part
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

/// Format an optional decimal value.
///
/// `None` is the absent-balance marker and renders as [`NOT_AVAILABLE`].
pub fn format_decimal(value: Option<Decimal>, config: &FormatConfig) -> String {
    match value {
        Some(value) => format_value(value, config),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a resolved decimal value
pub fn format_value(value: Decimal, config: &FormatConfig) -> String {
    let rounded = match config.precision {
        Some(dp) => {
            let mut rounded =
                value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            // Pad short scales so precision 2 always prints two places
            rounded.rescale(dp);
            rounded
        }
        None => value,
    };

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();

    let (integer_part, decimal_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let grouped_integer = if config.ungrouped {
        integer_part.to_string()
    } else {
        group_digits(integer_part)
    };

    let mut body = match decimal_part {
        Some(frac) => format!("{}.{}", grouped_integer, frac),
        None => grouped_integer,
    };

    if let Some(symbol) = &config.symbol {
        body = format!("{}{}", symbol, body);
    }

    if negative {
        match config.negative_style {
            NegativeStyle::Parentheses => format!("({})", body),
            NegativeStyle::LeadingMinus => format!("-{}", body),
        }
    } else {
        body
    }
}

/// Insert thousands separators into an unsigned integer digit string
fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let mut result = String::new();
    let chars: Vec<char> = digits.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        result.push(ch);
        let remaining = chars.len() - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            result.push(',');
        }
    }

    result
}
