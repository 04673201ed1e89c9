use crate::config;
use anyhow::{Context, Result};
use tracing::{debug, error, info};

/// Destination for alert messages
#[allow(async_fn_in_trait)]
pub trait AlertSink {
    async fn send(&self, message: &str) -> Result<()>;
}

// -----------------------------------------------
// TELEGRAM TRANSPORT
// -----------------------------------------------
pub struct TelegramAlert {
    client: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramAlert {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            bot_token,
            chat_id,
        }
    }

    /// Credentials from TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID
    pub fn from_env() -> Self {
        Self::new(config::telegram_bot_token(), config::telegram_chat_id())
    }
}

impl AlertSink for TelegramAlert {
    async fn send(&self, message: &str) -> Result<()> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let params = [
            ("chat_id", self.chat_id.as_str()),
            ("text", message),
            ("parse_mode", "Markdown"),
        ];

        let res = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .context("Telegram request failed")?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let preview: String = body.chars().take(200).collect();
            anyhow::bail!("Telegram responded {}: {}", status, preview);
        }

        debug!(chat_id = %self.chat_id, "alert sent");
        Ok(())
    }
}

// -----------------------------------------------
// ALERT BATCHING
// -----------------------------------------------

/// Send buffered alerts in batches of at most `max_len` characters, joined by
/// a blank line. Transport errors are logged per batch and swallowed; the
/// buffer is cleared either way.
pub async fn flush_alert_buffer<S: AlertSink>(sink: &S, buffer: &mut Vec<String>, max_len: usize) {
    if buffer.is_empty() {
        info!("no alerts to send");
        return;
    }

    info!(alerts = buffer.len(), "flushing alert buffer");

    let mut batch: Vec<&str> = Vec::new();
    let mut batch_len = 0usize;

    for msg in buffer.iter() {
        if batch_len + msg.len() > max_len && !batch.is_empty() {
            send_batch(sink, &batch).await;
            batch.clear();
            batch_len = 0;
        }
        batch_len += msg.len();
        batch.push(msg);
    }

    if !batch.is_empty() {
        send_batch(sink, &batch).await;
    }

    buffer.clear();
}

async fn send_batch<S: AlertSink>(sink: &S, batch: &[&str]) {
    let message = batch.join("\n\n");
    if let Err(e) = sink.send(&message).await {
        error!("alert batch of {} message(s) dropped: {:#}", batch.len(), e);
    }
}
