use anyhow::Result;
use colored::Colorize;
use groww_premium_alerts::alerts::{flush_alert_buffer, TelegramAlert};
use groww_premium_alerts::config;
use groww_premium_alerts::groww_client::GrowwClient;
use groww_premium_alerts::logging;
use groww_premium_alerts::scraper::OptionChainScraper;
use std::sync::Arc;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    println!("{}", "=".repeat(60).blue());
    println!("{}", "Groww Premium Tracker".green().bold());
    println!("{}", "=".repeat(60).blue());
    println!(
        "{} Run started: {}",
        "ℹ".blue(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!();

    let client = Arc::new(GrowwClient::new()?);
    let sink = TelegramAlert::from_env();
    let mut alert_buffer: Vec<String> = Vec::new();

    let start_time = std::time::Instant::now();
    let mut failed: Vec<(&str, String)> = Vec::new();

    // One ticker at a time, one expiry at a time
    for spec in config::TRACKERS {
        println!("{} {}", "→".cyan(), spec.stock_id.yellow());

        let before = alert_buffer.len();
        let scraper = OptionChainScraper::from_tracker(Arc::clone(&client), spec);

        match scraper.run(&mut alert_buffer).await {
            Ok(()) => {
                let found = alert_buffer.len() - before;
                if found > 0 {
                    println!("  {} {} alert(s) buffered", "✓".green(), found);
                }
            }
            Err(e) => {
                error!(stock_id = %spec.stock_id, "scraper failed: {:#}", e);
                failed.push((spec.stock_id, format!("{:#}", e)));
                println!("  {} skipped", "✗".red());
            }
        }
    }

    let elapsed = start_time.elapsed();

    println!();
    println!("{}", "=".repeat(60).blue());
    println!("{}", "Summary".cyan().bold());
    println!("{}", "=".repeat(60).blue());
    println!("{} Successful: {}", "✓".green(), config::TRACKERS.len() - failed.len());
    println!("{} Failed: {}", "✗".red(), failed.len());
    println!("{} Alerts buffered: {}", "ℹ".blue(), alert_buffer.len());
    println!("{} Time taken: {:.2}s", "⏱".yellow(), elapsed.as_secs_f64());
    println!();

    if !failed.is_empty() {
        println!("{}", "Failed Tickers:".red());
        for (stock_id, e) in failed.iter().take(10) {
            println!(
                "  {} {} → {}",
                "✗".red(),
                stock_id.yellow(),
                e.chars().take(80).collect::<String>()
            );
        }
        println!();
    }

    flush_alert_buffer(&sink, &mut alert_buffer, config::MAX_ALERT_BATCH_LEN).await;

    println!("{}", "Done!".green().bold());

    Ok(())
}
