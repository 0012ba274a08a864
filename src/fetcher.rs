use crate::error::LoadError;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, ORIGIN, PRAGMA, REFERER,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Maximum number of characters of an error body kept for diagnostics
const ERROR_BODY_LIMIT: usize = 200;

/// Somewhere a CSV document can be downloaded from
#[async_trait]
pub trait CsvSource: Send + Sync {
    /// Fetch the full document behind `url` as text
    async fn fetch_text(&self, url: &Url) -> Result<String, LoadError>;
}

/// Downloads the sheet over HTTP, looking like a regular browser request
/// since spreadsheet export hosts may turn away bare clients.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Without `timeout` the request waits as long as the transport allows
    pub fn new(timeout: Option<Duration>) -> Result<Self, LoadError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/csv,text/plain,*/*"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("fr-FR,fr;q=0.9,en-US;q=0.8,en;q=0.7"),
        );
        headers.insert(REFERER, HeaderValue::from_static("https://docs.google.com/"));
        headers.insert(ORIGIN, HeaderValue::from_static("https://docs.google.com"));
        // Always ask for the freshest document
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let mut builder = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CsvSource for HttpFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String, LoadError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        debug!("[Recipes] HTTP {} from {}", status, url);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = truncate_chars(&body, ERROR_BODY_LIMIT);
            error!(
                "[Recipes] HTTP error {} while downloading the CSV: {}",
                status.as_u16(),
                body
            );
            return Err(LoadError::Fetch {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
