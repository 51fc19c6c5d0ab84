// Record-file loading over HTTP
use crate::model::ScraperError;

use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, LAST_MODIFIED};
use std::time::Duration;

pub struct CsvLoader {
    client: Client,
}

impl CsvLoader {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) DeedwatchBot/0.1")
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        Self { client }
    }

    /// Downloads the records file, bypassing intermediary caches.
    pub async fn fetch_csv(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScraperError::InvalidStatus(response.status()));
        }

        Ok(response.text().await?)
    }

    /// Best-effort probe for the records file's `Last-Modified`
    /// header. A failed request or a missing header degrades to
    /// "unknown"; a non-OK status alone does not.
    pub async fn fetch_last_modified(&self, url: &str) -> String {
        match self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
        {
            Ok(response) => response
                .headers()
                .get(LAST_MODIFIED)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("unknown")
                .to_string(),
            Err(_) => "unknown".to_string(),
        }
    }
}
