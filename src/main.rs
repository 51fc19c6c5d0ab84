use deedwatch::config::{AppConfig, CountyConfig, load_config};
use deedwatch::model::{DeedRecord, ScrapeRequest};
use deedwatch::scraper::{PageFetcher, vendor_for};
use deedwatch::storage::CsvStore;

use futures::future::join_all;
use std::sync::Arc;
use tokio::time::{Duration, sleep};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file
    let config: Arc<AppConfig> = match load_config("config.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let counties: Vec<CountyConfig> = match &config.only_county {
        Some(only) => {
            let picked: Vec<CountyConfig> = config
                .counties
                .iter()
                .filter(|c| &c.name == only)
                .cloned()
                .collect();
            info!("only_county set, running {} county: {}", picked.len(), only);
            picked
        }
        None => {
            info!("Loaded {} counties", config.counties.len());
            config.counties.clone()
        }
    };

    let fetcher = PageFetcher::new();

    // Process all counties concurrently
    let tasks: Vec<_> = counties
        .iter()
        .map(|county| scrape_county(county, &fetcher, config.clone()))
        .collect();
    let results = join_all(tasks).await;
    let all_rows: Vec<DeedRecord> = results.into_iter().flatten().collect();
    info!("Collected {} row(s) across {} counties", all_rows.len(), counties.len());

    let store = CsvStore::new(config.out_csv.as_str());
    match store.merge_and_save(all_rows) {
        Ok(total) => info!("Saved {} rows to {}", total, config.out_csv),
        Err(e) => error!("Failed to write {}: {}", config.out_csv, e),
    }
}

/// Scrapes a single county. A county that errors or comes back empty
/// gets one more attempt after a short pause; after that it degrades
/// to zero rows without failing the run.
async fn scrape_county(
    county: &CountyConfig,
    fetcher: &PageFetcher,
    config: Arc<AppConfig>,
) -> Vec<DeedRecord> {
    info!("Scraping {}...", county.name);
    let request = ScrapeRequest {
        county: county.name.clone(),
        search_url: county.search_url.clone(),
        from: config.date_from,
        to: config.date_to,
    };
    let vendor = vendor_for(&county.vendor);

    for attempt in 1..=2 {
        match vendor.scrape(fetcher, &request).await {
            Ok(rows) if !rows.is_empty() => {
                info!("{}: {} row(s)", county.name, rows.len());
                return rows;
            }
            Ok(_) => warn!("{}: attempt {} returned 0 rows", county.name, attempt),
            Err(e) => warn!("{}: attempt {} failed: {}", county.name, attempt, e),
        }
        if attempt == 1 {
            sleep(Duration::from_millis(1500)).await;
        }
    }

    Vec::new()
}
