use std::time::Duration;

// -----------------------------------------------
// GROWW PAGE ENDPOINTS
// -----------------------------------------------
pub const GROWW_BASE_URL: &str = "https://groww.in/options";

pub fn groww_option_page_url(stock_id: &str, expiry: Option<&str>) -> String {
    match expiry {
        Some(expiry) => format!(
            "{}/{}?expiry={}",
            GROWW_BASE_URL,
            stock_id,
            urlencoding::encode(expiry) // URL-encode the expiry (just in case)
        ),
        None => format!("{}/{}", GROWW_BASE_URL, stock_id),
    }
}

// -----------------------------------------------
// HTTP CLIENT CONFIG
// -----------------------------------------------
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                               AppleWebKit/537.36 (KHTML, like Gecko) \
                               Chrome/131.0.0.0 Safari/537.36";

pub const ACCEPT_LANGUAGES: &[&str] = &[
    "en-US,en;q=0.9",
    "en-GB,en;q=0.8",
    "en-IN,en;q=0.9",
];

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

pub const HEADER_ACCEPT_HTML: &str = "text/html";

// -----------------------------------------------
// PREMIUM THRESHOLDS
// -----------------------------------------------
pub const DEFAULT_MIN_PREMIUM: f64 = 4000.0;
pub const DEFAULT_MIN_OI: f64 = 50.0;

// Target strikes sit ~9.5% either side of the underlying
pub const PUT_TARGET_RATIO: f64 = 0.905;
pub const CALL_TARGET_RATIO: f64 = 1.095;

// Premium quantity when no per-ticker override is given
pub const DEFAULT_LOT_MULTIPLIER: f64 = 2.0;

// -----------------------------------------------
// ALERT BATCHING
// -----------------------------------------------
// Telegram caps messages at 4096 chars; leave headroom for separators
pub const MAX_ALERT_BATCH_LEN: usize = 3900;

// -----------------------------------------------
// TRACKED TICKERS
// -----------------------------------------------
#[derive(Debug, Clone, Copy)]
pub struct TrackerSpec {
    pub stock_id: &'static str,
    pub premium_qty: Option<f64>,
    pub min_premium: Option<f64>,
}

impl TrackerSpec {
    const fn with_defaults(stock_id: &'static str) -> Self {
        Self { stock_id, premium_qty: None, min_premium: None }
    }
}

pub const TRACKERS: &[TrackerSpec] = &[
    TrackerSpec { stock_id: "nifty", premium_qty: Some(750.0), min_premium: Some(30000.0) },
    TrackerSpec::with_defaults("infosys-ltd"),
    TrackerSpec::with_defaults("hindustan-unilever-ltd"),
    TrackerSpec::with_defaults("reliance-industries-ltd"),
    TrackerSpec::with_defaults("state-bank-of-india"),
    TrackerSpec::with_defaults("tata-consultancy-services-ltd"),
    TrackerSpec::with_defaults("wipro-ltd"),
    TrackerSpec::with_defaults("itc-ltd"),
    TrackerSpec::with_defaults("bharti-airtel-ltd"),
    TrackerSpec::with_defaults("icici-bank-ltd"),
    TrackerSpec::with_defaults("hdfc-bank-ltd"),
    TrackerSpec::with_defaults("axis-bank-ltd"),
    TrackerSpec::with_defaults("maruti-suzuki-india-ltd"),
    TrackerSpec::with_defaults("nestle-india-ltd"),
    TrackerSpec::with_defaults("apollo-hospitals-enterprise-ltd"),
];

// -----------------------------------------------
// RUNTIME CONFIGURATION
// -----------------------------------------------

/// Telegram bot token from environment
pub fn telegram_bot_token() -> String {
    std::env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default()
}

/// Telegram chat id from environment
pub fn telegram_chat_id() -> String {
    std::env::var("TELEGRAM_CHAT_ID").unwrap_or_default()
}

/// Optional global minimum-premium override
pub fn min_premium_override() -> Option<f64> {
    std::env::var("GROWW_MIN_PREMIUM").ok()?.parse().ok()
}

/// Optional global minimum-OI override
pub fn min_oi_override() -> Option<f64> {
    std::env::var("GROWW_MIN_OI").ok()?.parse().ok()
}
