pub mod alerts;
pub mod config;
pub mod groww_client;
pub mod logging;
pub mod models;
pub mod processor;
pub mod rules;
pub mod scraper;

// Re-exports for convenience
pub use alerts::{AlertSink, TelegramAlert};
pub use groww_client::GrowwClient;
pub use models::{ContractSide, OptionContract, PageData};
pub use rules::{Alert, Thresholds};
pub use scraper::{OptionChainScraper, StockSnapshot};
