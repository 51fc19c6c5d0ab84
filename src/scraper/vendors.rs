// Registry-vendor search and detail-page extraction
use crate::model::{DeedRecord, ScrapeRequest, ScraperError};
use crate::scraper::{PageFetcher, VendorScraper};
use crate::utils::{absolutize, uniq};
use rand::Rng;
use scraper::{Html, Selector};
use tokio::time::{Duration, sleep};
use tracing::{info, warn};
use url::Url;

// Href markers and anchor-text hints that registry result pages use
// for links into single-document views.
const DETAIL_HREF_MARKERS: [&str; 4] = ["DocView", "Document", "Details", "Viewer"];
const DETAIL_TEXT_HINTS: [&str; 2] = ["View", "Document"];
const PDF_TEXT_HINTS: [&str; 3] = ["PDF", "Download", "View"];

pub struct MassLandRecords;
pub struct BrownTech;
pub struct Kofile;
pub struct CustomLink;

/// Picks the scraper for a configured vendor string. Unknown vendors
/// fall back to the plain PDF-link collector.
pub fn vendor_for(name: &str) -> &'static dyn VendorScraper {
    match name {
        "masslandrecords" => &MassLandRecords,
        "browntech_barnstable" | "browntech_alis" => &BrownTech,
        "kofile_titleview" | "kofile_taunton" => &Kofile,
        _ => &CustomLink,
    }
}

#[async_trait::async_trait]
impl VendorScraper for MassLandRecords {
    async fn scrape(
        &self,
        fetcher: &PageFetcher,
        req: &ScrapeRequest,
    ) -> Result<Vec<DeedRecord>, ScraperError> {
        scrape_search_results(fetcher, req, "RecordedDateFrom", "RecordedDateTo").await
    }
}

#[async_trait::async_trait]
impl VendorScraper for BrownTech {
    async fn scrape(
        &self,
        fetcher: &PageFetcher,
        req: &ScrapeRequest,
    ) -> Result<Vec<DeedRecord>, ScraperError> {
        scrape_search_results(fetcher, req, "FromDate", "ToDate").await
    }
}

#[async_trait::async_trait]
impl VendorScraper for Kofile {
    async fn scrape(
        &self,
        fetcher: &PageFetcher,
        req: &ScrapeRequest,
    ) -> Result<Vec<DeedRecord>, ScraperError> {
        scrape_search_results(fetcher, req, "fromDate", "toDate").await
    }
}

#[async_trait::async_trait]
impl VendorScraper for CustomLink {
    /// Collects every PDF anchor on the configured page directly, one
    /// record per distinct link.
    async fn scrape(
        &self,
        fetcher: &PageFetcher,
        req: &ScrapeRequest,
    ) -> Result<Vec<DeedRecord>, ScraperError> {
        info!("[{}] Opening {}", req.county, req.search_url);
        let base = Url::parse(&req.search_url)?;
        let html = fetcher.fetch_html(base.as_str()).await?;
        let links = pdf_links(&html, &base)?;
        Ok(links
            .into_iter()
            .map(|pdf_url| DeedRecord {
                county: req.county.clone(),
                detail_url: req.search_url.clone(),
                pdf_url,
            })
            .collect())
    }
}

/// Shared vendor flow: search page with a recorded-date window, then
/// one detail fetch per candidate link. A failed detail page is logged
/// and skipped; it never fails the county.
async fn scrape_search_results(
    fetcher: &PageFetcher,
    req: &ScrapeRequest,
    from_key: &str,
    to_key: &str,
) -> Result<Vec<DeedRecord>, ScraperError> {
    let mut search_url = Url::parse(&req.search_url)?;
    search_url
        .query_pairs_mut()
        .append_pair(from_key, &req.from.to_string())
        .append_pair(to_key, &req.to.to_string());

    info!("[{}] Opening {}", req.county, search_url);
    let html = fetcher.fetch_html(search_url.as_str()).await?;
    let links = detail_links(&html, &search_url)?;
    info!("[{}] Found {} detail links", req.county, links.len());

    let mut rows = Vec::new();
    for (i, link) in links.iter().enumerate() {
        match fetcher.fetch_html(link).await {
            Ok(detail_html) => {
                let detail_base = Url::parse(link)?;
                let pdf_url = first_pdf_link(&detail_html, &detail_base)?;
                info!(
                    "[{}] {}/{} PDF: {}",
                    req.county,
                    i + 1,
                    links.len(),
                    if pdf_url.is_some() { "yes" } else { "no" }
                );
                rows.push(DeedRecord {
                    county: req.county.clone(),
                    detail_url: link.clone(),
                    pdf_url: pdf_url.unwrap_or_default(),
                });
            }
            Err(e) => warn!("[{}] Detail {}/{} failed: {}", req.county, i + 1, links.len(), e),
        }
        pause_briefly().await;
    }

    Ok(rows)
}

async fn pause_briefly() {
    let ms: u64 = rand::rng().random_range(300..900);
    sleep(Duration::from_millis(ms)).await;
}

/// Candidate detail-page links from a result page, first-seen order,
/// duplicates dropped, relative hrefs resolved against `base`.
fn detail_links(html: &str, base: &Url) -> Result<Vec<String>, ScraperError> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").map_err(|_| ScraperError::Selector)?;

    let mut links = Vec::new();
    for anchor in document.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let text = anchor.text().collect::<String>();
        let marker_hit = DETAIL_HREF_MARKERS.iter().any(|m| href.contains(m));
        let hint_hit = DETAIL_TEXT_HINTS.iter().any(|h| text.contains(h));
        if marker_hit || hint_hit {
            if let Some(link) = absolutize(base, href) {
                links.push(link);
            }
        }
    }
    Ok(uniq(links))
}

/// First PDF link on a detail page: direct `.pdf` hrefs win, then any
/// anchor whose text suggests a document download.
fn first_pdf_link(html: &str, base: &Url) -> Result<Option<String>, ScraperError> {
    let document = Html::parse_document(html);

    let direct = Selector::parse("a[href$='.pdf'], a[href*='.PDF']")
        .map_err(|_| ScraperError::Selector)?;
    if let Some(anchor) = document.select(&direct).next() {
        if let Some(href) = anchor.value().attr("href") {
            return Ok(absolutize(base, href));
        }
    }

    let anchors = Selector::parse("a[href]").map_err(|_| ScraperError::Selector)?;
    for anchor in document.select(&anchors) {
        let text = anchor.text().collect::<String>();
        if PDF_TEXT_HINTS.iter().any(|h| text.contains(h)) {
            if let Some(href) = anchor.value().attr("href") {
                return Ok(absolutize(base, href));
            }
        }
    }

    Ok(None)
}

/// Every distinct PDF link on a page, first-seen order.
fn pdf_links(html: &str, base: &Url) -> Result<Vec<String>, ScraperError> {
    let document = Html::parse_document(html);
    let direct = Selector::parse("a[href$='.pdf'], a[href*='.PDF']")
        .map_err(|_| ScraperError::Selector)?;
    let links: Vec<String> = document
        .select(&direct)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| absolutize(base, href))
        .collect();
    Ok(uniq(links))
}
