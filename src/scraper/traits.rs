use crate::model::{DeedRecord, ScrapeRequest, ScraperError};
use crate::scraper::PageFetcher;

#[async_trait::async_trait]
pub trait VendorScraper: Send + Sync {
    async fn scrape(
        &self,
        fetcher: &PageFetcher,
        req: &ScrapeRequest,
    ) -> Result<Vec<DeedRecord>, ScraperError>;
}
