use crate::config::{self, TrackerSpec};
use crate::groww_client::GrowwClient;
use crate::models::ContractSide;
use crate::processor;
use crate::rules::{self, Thresholds};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Per-ticker fields read from the main option page
#[derive(Debug, Clone)]
pub struct StockSnapshot {
    pub name: String,
    pub ltp: f64,
    pub lot_size: f64,
    pub expiry_dates: Vec<String>,
}

/// Scrapes one ticker's option chain and evaluates premiums per expiry
pub struct OptionChainScraper {
    client: Arc<GrowwClient>,
    stock_id: String,
    premium_qty_override: Option<f64>,
    thresholds: Thresholds,
}

impl OptionChainScraper {
    pub fn new(
        client: Arc<GrowwClient>,
        stock_id: impl Into<String>,
        premium_qty_override: Option<f64>,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            client,
            stock_id: stock_id.into(),
            premium_qty_override,
            thresholds,
        }
    }

    /// Build a scraper from a tracker table entry, applying its overrides on
    /// top of the environment defaults
    pub fn from_tracker(client: Arc<GrowwClient>, spec: &TrackerSpec) -> Self {
        let mut thresholds = Thresholds::from_env();
        if let Some(min_premium) = spec.min_premium {
            thresholds.min_premium = min_premium;
        }
        Self::new(client, spec.stock_id, spec.premium_qty, thresholds)
    }

    pub fn stock_id(&self) -> &str {
        &self.stock_id
    }

    /// Fetch stock details (name, LTP, lot size, expiry dates) from the main page
    pub async fn initialize(&self) -> Result<StockSnapshot> {
        info!(stock_id = %self.stock_id, "initializing stock data");

        let page = self.client.fetch_page(&self.stock_id, None).await?;
        let data = page.props.page_props.data;

        let details = data
            .option_chain
            .aggregated_details
            .context("Page carries no aggregated option details")?;

        let snapshot = StockSnapshot {
            name: data.company.name,
            ltp: data.company.live_data.ltp,
            lot_size: details.lot_size,
            expiry_dates: details.expiry_dates,
        };

        info!(
            name = %snapshot.name,
            ltp = snapshot.ltp,
            lot_size = snapshot.lot_size,
            expiries = snapshot.expiry_dates.len(),
            "initialized"
        );

        Ok(snapshot)
    }

    /// Process one expiry: nearest-strike selection, threshold check, buffer append
    pub async fn process_expiry(
        &self,
        snapshot: &StockSnapshot,
        expiry: &str,
        buffer: &mut Vec<String>,
    ) -> Result<()> {
        info!(stock_id = %self.stock_id, expiry, "processing expiry");

        let page = self.client.fetch_page(&self.stock_id, Some(expiry)).await?;
        let contracts = page.props.page_props.data.option_chain.option_contracts;
        if contracts.is_empty() {
            anyhow::bail!("No option contracts for expiry {}", expiry);
        }

        let url = config::groww_option_page_url(&self.stock_id, Some(expiry));
        let premium_qty =
            processor::resolve_premium_qty(self.premium_qty_override, snapshot.lot_size);

        let closest_put =
            processor::find_closest_strike(&contracts, processor::put_target(snapshot.ltp))
                .context("Empty strike ladder")?;
        let closest_call =
            processor::find_closest_strike(&contracts, processor::call_target(snapshot.ltp))
                .context("Empty strike ladder")?;

        let (put_name, put_price, put_oi) = side_quote(closest_put.pe.as_ref());
        let (call_name, call_price, call_oi) = side_quote(closest_call.ce.as_ref());

        info!(
            "{} | Expiry {} | PUT {} -> {} (OI={}), CALL {} -> {} (OI={})",
            snapshot.name,
            expiry,
            put_name,
            processor::premium(put_price, premium_qty),
            put_oi,
            call_name,
            processor::premium(call_price, premium_qty),
            call_oi
        );

        if let Some(alert) = rules::evaluate_side(
            &snapshot.name,
            snapshot.ltp,
            expiry,
            "PE",
            &put_name,
            put_price,
            put_oi,
            premium_qty,
            &self.thresholds,
            &url,
        ) {
            buffer.push(alert.message());
        }

        if let Some(alert) = rules::evaluate_side(
            &snapshot.name,
            snapshot.ltp,
            expiry,
            "CE",
            &call_name,
            call_price,
            call_oi,
            premium_qty,
            &self.thresholds,
            &url,
        ) {
            buffer.push(alert.message());
        }

        Ok(())
    }

    /// Run the scraper across all expiry dates. A failing expiry is skipped;
    /// an initialization failure surfaces to the driver.
    pub async fn run(&self, buffer: &mut Vec<String>) -> Result<()> {
        let snapshot = self
            .initialize()
            .await
            .with_context(|| format!("Failed to initialize {}", self.stock_id))?;

        for expiry in &snapshot.expiry_dates {
            if let Err(e) = self.process_expiry(&snapshot, expiry, buffer).await {
                warn!(stock_id = %self.stock_id, expiry = %expiry, "skipping expiry: {:#}", e);
            }
        }

        Ok(())
    }
}

/// Quote for one contract side; a missing side quotes as price 0 / OI 0
fn side_quote(side: Option<&ContractSide>) -> (String, f64, f64) {
    match side {
        Some(side) => (
            side.long_display_name.clone(),
            side.live_data.ltp,
            side.live_data.oi,
        ),
        None => ("-".to_string(), 0.0, 0.0),
    }
}
