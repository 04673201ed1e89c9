use crate::config;
use crate::models::PageData;
use anyhow::{Context, Result};
use rand::{seq::SliceRandom, thread_rng};
use reqwest::{header, Client};
use tracing::info;

// -----------------------------------------------
// CLIENT WRAPPER FOR GROWW OPTION PAGES
// -----------------------------------------------
pub struct GrowwClient {
    client: Client,
}

impl GrowwClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_client()?,
        })
    }

    /// Fetch one option page and decode the JSON payload embedded in its HTML.
    /// One GET per (ticker, expiry); failures are the caller's to handle.
    pub async fn fetch_page(&self, stock_id: &str, expiry: Option<&str>) -> Result<PageData> {
        let url = config::groww_option_page_url(stock_id, expiry);
        info!(%url, "fetching option chain page");

        let res = self
            .client
            .get(&url)
            .header(header::ACCEPT, config::HEADER_ACCEPT_HTML)
            .send()
            .await
            .context("Request send failed")?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let preview: String = body.chars().take(200).collect();
            anyhow::bail!("Request for {} failed with {}: {}", url, status, preview);
        }

        let html = res.text().await.context("Failed to read body")?;

        let raw = extract_next_data(&html)
            .with_context(|| format!("No __NEXT_DATA__ script in page at {}", url))?;

        let page: PageData =
            serde_json::from_str(raw).context("Failed to parse __NEXT_DATA__ payload")?;

        Ok(page)
    }
}

/// Pull the body of the `<script id="__NEXT_DATA__" ...>` tag out of a page.
///
/// Scans locally around the id attribute instead of parsing the whole
/// document; tolerates attribute order and either quoting style.
pub fn extract_next_data(html: &str) -> Option<&str> {
    let id_at = html
        .find(r#"id="__NEXT_DATA__""#)
        .or_else(|| html.find("id='__NEXT_DATA__'"))?;

    let open = html[..id_at].rfind("<script")?;
    let body_start = open + html[open..].find('>')? + 1;
    let body_end = body_start + html[body_start..].find("</script>")?;

    Some(html[body_start..body_end].trim())
}

// -----------------------------------------------
// HTTP CLIENT BUILDER
// -----------------------------------------------
fn build_client() -> Result<Client> {
    let mut headers = header::HeaderMap::new();

    // Rotating Accept-Language headers (fingerprint avoidance)
    let lang = config::ACCEPT_LANGUAGES.choose(&mut thread_rng()).unwrap();
    headers.insert(
        header::ACCEPT_LANGUAGE,
        header::HeaderValue::from_str(lang)?,
    );
    headers.insert(header::ACCEPT, header::HeaderValue::from_static("*/*"));

    Ok(Client::builder()
        .default_headers(headers)
        .user_agent(config::USER_AGENT)
        .timeout(config::HTTP_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?)
}
