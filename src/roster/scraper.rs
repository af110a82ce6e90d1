//! Browser-backed page fetcher for the registration roster.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::{ScraperConfig, RESULTS_TABLE_ID};
use crate::error::ScraperError;
use crate::traits::{RowSource, Scraper};

use super::pagination::{collect_runners, RosterScrape};
use super::types::RawRow;

/// Poll interval while waiting for the results table to appear.
const ELEMENT_POLL_MS: u64 = 50;

pub struct RosterScraper {
    config: ScraperConfig,
    browser: Option<Browser>,
    page: Option<Arc<Page>>,
}

impl RosterScraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            config,
            browser: None,
            page: None,
        }
    }

    fn get_page(&self) -> Result<&Arc<Page>, ScraperError> {
        self.page
            .as_ref()
            .ok_or_else(|| ScraperError::BrowserInit("browser not initialized".into()))
    }

    /// Bounded wait for the results table, the uniform implicit wait applied
    /// to every page load.
    async fn wait_for_table(&self, page: &Page, page_number: u32) -> Result<(), ScraperError> {
        let probe = format!("document.getElementById('{}') !== null", RESULTS_TABLE_ID);
        let start = Instant::now();

        loop {
            let present: bool = page
                .evaluate(probe.as_str())
                .await
                .map_err(|e| ScraperError::Navigation(e.to_string()))?
                .into_value()
                .unwrap_or(false);

            if present {
                return Ok(());
            }
            if start.elapsed() >= self.config.element_wait {
                return Err(ScraperError::ElementNotFound(format!(
                    "#{} on page {}",
                    RESULTS_TABLE_ID, page_number
                )));
            }
            sleep(Duration::from_millis(ELEMENT_POLL_MS)).await;
        }
    }

    /// JS that pulls every tbody row of the results table out as trimmed
    /// cell text; null when the table or its body is missing.
    fn extract_rows_js() -> String {
        format!(
            r#"
            (function() {{
                var table = document.getElementById('{id}');
                if (table === null) {{
                    return null;
                }}
                var body = table.querySelector('tbody');
                if (body === null) {{
                    return null;
                }}
                var rows = [];
                var trs = body.querySelectorAll('tr');
                for (var i = 0; i < trs.length; i++) {{
                    var cells = [];
                    var tds = trs[i].querySelectorAll('td');
                    for (var j = 0; j < tds.length; j++) {{
                        cells.push(tds[j].innerText.trim());
                    }}
                    rows.push(cells);
                }}
                return rows;
            }})()
            "#,
            id = RESULTS_TABLE_ID
        )
    }
}

#[async_trait]
impl RowSource for RosterScraper {
    async fn fetch_rows(&self, page_number: u32) -> Result<Vec<RawRow>, ScraperError> {
        let page = self.get_page()?.clone();

        let url = format!("{}?pag={}", self.config.base_url, page_number);
        debug!("navigating to {}", url);
        page.goto(url.as_str())
            .await
            .map_err(|e| ScraperError::Navigation(e.to_string()))?;
        page.wait_for_navigation()
            .await
            .map_err(|e| ScraperError::Navigation(e.to_string()))?;

        self.wait_for_table(&page, page_number).await?;

        let js = Self::extract_rows_js();
        let rows = page
            .evaluate(js.as_str())
            .await
            .map_err(|e| ScraperError::Navigation(e.to_string()))?
            .into_value::<Option<Vec<RawRow>>>()
            .map_err(|e| ScraperError::Navigation(format!("row extraction: {}", e)))?
            .ok_or_else(|| {
                ScraperError::ElementNotFound(format!(
                    "#{} tbody on page {}",
                    RESULTS_TABLE_ID, page_number
                ))
            })?;

        debug!("page {}: {} raw rows", page_number, rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl Scraper for RosterScraper {
    async fn initialize(&mut self) -> Result<(), ScraperError> {
        info!("initializing browser...");

        let mut builder = BrowserConfig::builder().window_size(1280, 800);
        if self.config.headless {
            builder = builder.arg("--headless=new");
        }

        let browser_config = builder
            .build()
            .map_err(|e| ScraperError::BrowserInit(format!("browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;

        // CDP event pump
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                debug!("Browser event: {:?}", event);
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScraperError::BrowserInit(e.to_string()))?;

        self.browser = Some(browser);
        self.page = Some(Arc::new(page));

        info!("browser initialized");
        Ok(())
    }

    async fn scrape(&mut self, start_page: u32) -> Result<RosterScrape, ScraperError> {
        collect_runners(&*self, start_page).await
    }

    async fn close(&mut self) -> Result<(), ScraperError> {
        info!("closing browser...");

        self.page = None;
        self.browser = None;

        info!("browser closed");
        Ok(())
    }
}
