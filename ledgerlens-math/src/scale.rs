//! Minor-unit scale conversion
//!
//! Upstream APIs deliver balances as integers counted in a currency's
//! minor unit (e.g. cents). This module converts those integers into
//! decimal major units using exact decimal construction; no
//! floating-point division is involved, so large balances rescale
//! without rounding drift.

use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scale assumed when no source on a record resolves one.
pub const DEFAULT_SCALE: u32 = 2;

/// Currency code assumed when no source on a record resolves one.
pub const DEFAULT_CURRENCY_CODE: &str = "USD";

/// Largest scale an exact decimal value can carry.
pub const MAX_SCALE: u32 = 28;

/// Errors that can occur while building a scale configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// Requested default scale exceeds decimal capacity
    #[error("scale {0} exceeds the maximum supported scale of {MAX_SCALE}")]
    ScaleTooLarge(u32),
}

/// Result type for scale configuration operations
pub type ScaleResult<T> = Result<T, ScaleError>;

/// Injected defaults for currency resolution and minor-unit scaling.
///
/// Every call site that needs a fallback scale or fallback currency code
/// reads it from a single `ScaleConfig` value rather than from constants
/// scattered through the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Scale applied when a record resolves only a bare currency code,
    /// or no currency information at all
    pub default_scale: u32,

    /// Currency code applied when no candidate location resolves one
    pub default_currency: String,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            default_scale: DEFAULT_SCALE,
            default_currency: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

impl ScaleConfig {
    /// Create a configuration with the standard defaults (scale 2, USD)
    pub fn new() -> Self {
        Default::default()
    }

    /// Override the default scale, rejecting scales beyond decimal capacity
    pub fn with_default_scale(mut self, scale: u32) -> ScaleResult<Self> {
        if scale > MAX_SCALE {
            return Err(ScaleError::ScaleTooLarge(scale));
        }
        self.default_scale = scale;
        Ok(self)
    }

    /// Override the default currency code
    pub fn with_default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = code.into();
        self
    }
}

/// Convert an integer minor-unit balance into major units.
///
/// The result is the exact value `minor / 10^scale`. Returns `None` when
/// the scale exceeds decimal capacity or the magnitude does not fit;
/// callers render `None` as "N/A".
pub fn to_decimal(minor: i128, scale: u32) -> Option<Decimal> {
    Decimal::try_from_i128_with_scale(minor, scale).ok()
}

/// Convert a fractional balance reading into major units.
///
/// Upstream records occasionally carry balances as JSON floats rather
/// than integers. Finite values are captured and rescaled; NaN and the
/// infinities yield `None`.
pub fn from_f64(minor: f64, scale: u32) -> Option<Decimal> {
    if !minor.is_finite() || scale > MAX_SCALE {
        return None;
    }
    let value = Decimal::from_f64(minor)?;
    // Multiplying by 10^-scale divides exactly without a float round trip
    value.checked_mul(Decimal::new(1, scale))
}
