use crate::config;
use crate::processor;
use serde::{Deserialize, Serialize};

/// A premium threshold crossing for one contract side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub stock_name: String,
    pub underlying_ltp: f64,
    pub expiry_date: String,
    pub option_type: String, // "CE" or "PE"
    pub contract_name: String,
    pub premium: f64,
    pub premium_qty: f64,
    pub last_price: f64,
    pub open_interest: f64,
    pub url: String,
}

impl Alert {
    /// One-line message pushed to the alert buffer
    pub fn message(&self) -> String {
        format!(
            "🚨 {} LTP {} | Expiry {} | {} | Premium {} | Lot {} | Price {} | OI {} | {}",
            self.stock_name,
            self.underlying_ltp,
            self.expiry_date,
            self.contract_name,
            self.premium,
            self.premium_qty,
            self.last_price,
            self.open_interest,
            self.url
        )
    }
}

/// Thresholds a contract side must cross before an alert fires
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub min_premium: f64,
    pub min_oi: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_premium: config::DEFAULT_MIN_PREMIUM,
            min_oi: config::DEFAULT_MIN_OI,
        }
    }
}

impl Thresholds {
    /// Defaults with any environment overrides applied
    pub fn from_env() -> Self {
        let mut thresholds = Self::default();
        if let Some(min_premium) = config::min_premium_override() {
            thresholds.min_premium = min_premium;
        }
        if let Some(min_oi) = config::min_oi_override() {
            thresholds.min_oi = min_oi;
        }
        thresholds
    }
}

/// Evaluate one contract side against the thresholds.
///
/// Fires only when both OI and premium strictly exceed their minimums; a
/// quote equal to a threshold stays quiet. Missing sides arrive as price 0 /
/// OI 0 and never fire.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_side(
    stock_name: &str,
    underlying_ltp: f64,
    expiry_date: &str,
    option_type: &str,
    contract_name: &str,
    last_price: f64,
    open_interest: f64,
    premium_qty: f64,
    thresholds: &Thresholds,
    url: &str,
) -> Option<Alert> {
    let premium = processor::premium(last_price, premium_qty);

    if open_interest > thresholds.min_oi && premium > thresholds.min_premium {
        Some(Alert {
            stock_name: stock_name.to_string(),
            underlying_ltp,
            expiry_date: expiry_date.to_string(),
            option_type: option_type.to_string(),
            contract_name: contract_name.to_string(),
            premium,
            premium_qty,
            last_price,
            open_interest,
            url: url.to_string(),
        })
    } else {
        None
    }
}
