use async_trait::async_trait;

use crate::error::ScraperError;
use crate::roster::{RawRow, RosterScrape};

/// Source of raw table rows, one page at a time.
///
/// The pagination driver only talks to this trait, so it can be driven by an
/// in-memory source in tests just as well as by a live browser.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetch all body rows of the given 1-based page as plain cell text.
    async fn fetch_rows(&self, page: u32) -> Result<Vec<RawRow>, ScraperError>;
}

#[async_trait]
pub trait Scraper: Send + Sync {
    /// Browser startup
    async fn initialize(&mut self) -> Result<(), ScraperError>;

    /// Walk pages from `start_page` until the data runs out
    async fn scrape(&mut self, start_page: u32) -> Result<RosterScrape, ScraperError>;

    /// Release the browser session
    async fn close(&mut self) -> Result<(), ScraperError>;

    /// Full run (initialize → scrape → close); the session is released on
    /// the error path too.
    async fn execute(&mut self, start_page: u32) -> Result<RosterScrape, ScraperError> {
        self.initialize().await?;
        let outcome = self.scrape(start_page).await;
        self.close().await?;
        outcome
    }
}
