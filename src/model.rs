// Core structs: DeedRecord, RawRow, Record, plus the error taxonomy
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One collected row as written to `records.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeedRecord {
    pub county: String,
    pub detail_url: String,
    pub pdf_url: String,
}

/// One parsed CSV row before normalization: header name → field value,
/// in file order. Lookups are exact-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn from_pairs(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Canonical viewer record. Both fields are always present after
/// normalization; the empty string is the empty representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub county: String,
    pub pdf_url: String,
}

#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub county: String,
    pub search_url: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    InvalidStatus(reqwest::StatusCode),
    #[error("invalid selector")]
    Selector,
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("csv parse failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv input has no header row")]
    MissingHeaders,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("records file io: {0}")]
    Io(#[from] std::io::Error),
    #[error("records file csv: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("date_from {0} is after date_to {1}")]
    BadDateRange(NaiveDate, NaiveDate),
}

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Fetch(#[from] ScraperError),
    #[error(transparent)]
    Parse(#[from] ParserError),
    #[error("command input failed: {0}")]
    Io(#[from] std::io::Error),
}
