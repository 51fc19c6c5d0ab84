use crate::model::ConfigError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct CountyConfig {
    pub name: String,
    pub vendor: String,
    pub search_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    pub csv_url: String,
    #[serde(default = "default_page_length")]
    pub page_length: usize,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    #[serde(default = "default_out_csv")]
    pub out_csv: String,
    #[serde(default)]
    pub only_county: Option<String>,
    pub counties: Vec<CountyConfig>,
    pub viewer: ViewerConfig,
}

fn default_page_length() -> usize {
    25
}

fn default_out_csv() -> String {
    "ma_deeds_data/records.csv".to_string()
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    if config.date_from > config.date_to {
        return Err(ConfigError::BadDateRange(config.date_from, config.date_to));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let raw = r#"{
            "date_from": "2025-09-10",
            "date_to": "2025-09-11",
            "counties": [
                {"name": "Suffolk", "vendor": "masslandrecords", "search_url": "https://example.com/search"}
            ],
            "viewer": {"csv_url": "https://example.com/records.csv"}
        }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.counties.len(), 1);
        assert_eq!(config.out_csv, "ma_deeds_data/records.csv");
        assert_eq!(config.viewer.page_length, 25);
        assert!(config.only_county.is_none());
    }

    #[test]
    fn rejects_inverted_date_range() {
        let raw = r#"{
            "date_from": "2025-09-12",
            "date_to": "2025-09-11",
            "counties": [],
            "viewer": {"csv_url": "https://example.com/records.csv"}
        }"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, raw).unwrap();
        let err = load_config(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::BadDateRange(_, _)));
    }
}
