use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tower::Service;
use tracing::info;

use crate::config::ScraperConfig;
use crate::error::ScraperError;
use crate::roster::{RosterScrape, RosterScraper, RosterSummary};
use crate::traits::Scraper;

/// One scrape run, as a request.
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub start_page: u32,
    pub headless: bool,
    pub base_url: Option<String>,
}

impl Default for ScrapeRequest {
    fn default() -> Self {
        Self {
            start_page: 1,
            headless: true,
            base_url: None,
        }
    }
}

impl ScrapeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_page(mut self, page: u32) -> Self {
        self.start_page = page;
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl From<ScrapeRequest> for ScraperConfig {
    fn from(req: ScrapeRequest) -> Self {
        let mut config = ScraperConfig::new().with_headless(req.headless);
        if let Some(url) = req.base_url {
            config = config.with_base_url(url);
        }
        config
    }
}

/// Scrape outcome together with its computed participation report.
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub scrape: RosterScrape,
    pub summary: RosterSummary,
}

impl ScrapeReport {
    pub fn new(scrape: RosterScrape) -> Self {
        let summary = RosterSummary::compute(&scrape.runners);
        Self { scrape, summary }
    }
}

/// Scraper wrapped as a tower::Service
#[derive(Debug, Clone, Default)]
pub struct ScraperService {
    // extension point (rate limiting, caching)
}

impl ScraperService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<ScrapeRequest> for ScraperService {
    type Response = ScrapeReport;
    type Error = ScraperError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ScrapeRequest) -> Self::Future {
        info!("scrape request received: start_page={}", req.start_page);
        let start_page = req.start_page;

        Box::pin(async move {
            let config: ScraperConfig = req.into();
            let mut scraper = RosterScraper::new(config);

            // execute releases the browser whether or not the pass succeeds
            let scrape = scraper.execute(start_page).await?;
            let report = ScrapeReport::new(scrape);

            info!(
                "scrape complete: {} runners, end={:?}",
                report.summary.total, report.scrape.end
            );

            Ok(report)
        })
    }
}
