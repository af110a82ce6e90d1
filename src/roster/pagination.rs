//! Pagination driver: walks result pages until the data runs out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ScraperError;
use crate::traits::RowSource;

use super::types::Runner;

/// How a scraping pass ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrapeEnd {
    /// A page came back with zero rows, the natural end of the data.
    Exhausted { pages: u32 },
    /// Fetching or validating `page` failed; that page contributed nothing.
    Failed { page: u32, reason: String },
}

/// Result of one full pagination pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterScrape {
    /// All validated runners in page-then-row order.
    pub runners: Vec<Runner>,
    pub end: ScrapeEnd,
    pub fetched_at: DateTime<Utc>,
}

/// Collect runners from consecutive pages starting at `start_page`.
///
/// Any per-page failure (fetch error, column mismatch, schema rejection)
/// stops the walk: pages before it are kept, the failing page contributes no
/// rows even if some of its rows were valid. The stop reason is logged and
/// surfaced through [`ScrapeEnd`] rather than as an error; only an invalid
/// start page fails the call itself, before any fetch.
pub async fn collect_runners<S: RowSource>(
    source: &S,
    start_page: u32,
) -> Result<RosterScrape, ScraperError> {
    if start_page == 0 {
        return Err(ScraperError::InvalidPageNumber(start_page));
    }

    let mut runners = Vec::new();
    let mut page = start_page;

    let end = loop {
        match fetch_page(source, page).await {
            Ok(mut batch) => {
                debug!("page {}: {} runners", page, batch.len());
                runners.append(&mut batch);
                page += 1;
            }
            Err(ScraperError::EmptyPage(_)) => {
                info!("page {} is empty, roster exhausted", page);
                break ScrapeEnd::Exhausted {
                    pages: page - start_page,
                };
            }
            Err(e) => {
                warn!("stopping at page {}: {}", page, e);
                break ScrapeEnd::Failed {
                    page,
                    reason: e.to_string(),
                };
            }
        }
    };

    info!("collected {} runners", runners.len());

    Ok(RosterScrape {
        runners,
        end,
        fetched_at: Utc::now(),
    })
}

/// Fetch and validate one page. Row failure is page-atomic: one bad row
/// discards the whole page.
async fn fetch_page<S: RowSource>(source: &S, page: u32) -> Result<Vec<Runner>, ScraperError> {
    info!("Getting runners from page {}", page);

    let rows = source.fetch_rows(page).await?;
    if rows.is_empty() {
        return Err(ScraperError::EmptyPage(page));
    }

    rows.iter().map(|row| Runner::from_cells(row)).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::roster::types::{Group, Race, RawRow};

    /// In-memory stand-in for the browser: page N serves `pages[N - 1]`,
    /// pages past the end are empty. Records every page number requested.
    struct FakeSource {
        pages: Vec<Vec<RawRow>>,
        requested: Mutex<Vec<u32>>,
    }

    impl FakeSource {
        fn new(pages: Vec<Vec<RawRow>>) -> Self {
            Self {
                pages,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<u32> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RowSource for FakeSource {
        async fn fetch_rows(&self, page: u32) -> Result<Vec<RawRow>, ScraperError> {
            self.requested.lock().unwrap().push(page);
            Ok(self
                .pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default())
        }
    }

    fn valid_row(id: &str, group: &str, race: &str) -> RawRow {
        vec!["", id, "Ana Silva", "Clube X", group, "Pago", race]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[tokio::test]
    async fn test_page_zero_is_rejected_before_any_fetch() {
        let source = FakeSource::new(vec![vec![valid_row("1", "Seniores F", "Caminhada")]]);

        match collect_runners(&source, 0).await {
            Err(ScraperError::InvalidPageNumber(0)) => {}
            other => panic!("expected InvalidPageNumber, got {:?}", other),
        }
        assert!(source.requested().is_empty());
    }

    #[tokio::test]
    async fn test_concatenates_pages_in_order_and_stops_at_empty() {
        let source = FakeSource::new(vec![
            vec![
                valid_row("1", "Seniores F", "Caminhada"),
                valid_row("2", "Seniores M", "Caminhada"),
            ],
            vec![valid_row("3", "Veteranos M40", "Mini Trail")],
        ]);

        let scrape = collect_runners(&source, 1).await.unwrap();

        let ids: Vec<&str> = scrape.runners.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(scrape.end, ScrapeEnd::Exhausted { pages: 2 });
        // page 3 was the empty probe, page 4 never requested
        assert_eq!(source.requested(), [1, 2, 3]);
    }

    #[tokio::test]
    async fn test_invalid_row_drops_its_whole_page() {
        let bad_row = valid_row("4", "Juniores F", "Caminhada");
        let source = FakeSource::new(vec![
            vec![
                valid_row("1", "Seniores F", "Caminhada"),
                valid_row("2", "Seniores M", "Mini Trail"),
            ],
            // one valid row before the bad one, still dropped
            vec![valid_row("3", "Seniores F", "Caminhada"), bad_row],
        ]);

        let scrape = collect_runners(&source, 1).await.unwrap();

        assert_eq!(scrape.runners.len(), 2);
        assert!(scrape.runners.iter().all(|r| r.id != "3"));
        match scrape.end {
            ScrapeEnd::Failed { page, ref reason } => {
                assert_eq!(page, 2);
                assert!(reason.contains("group"));
            }
            ref other => panic!("expected Failed, got {:?}", other),
        }
        assert_eq!(source.requested(), [1, 2]);
    }

    #[tokio::test]
    async fn test_short_row_fails_page_with_column_count() {
        let mut short = valid_row("2", "Seniores M", "Caminhada");
        short.pop();
        let source = FakeSource::new(vec![
            vec![valid_row("1", "Seniores F", "Caminhada")],
            vec![short],
        ]);

        let scrape = collect_runners(&source, 1).await.unwrap();

        assert_eq!(scrape.runners.len(), 1);
        match scrape.end {
            ScrapeEnd::Failed { page: 2, ref reason } => {
                assert!(reason.contains("expected 7, got 6"), "reason: {}", reason);
            }
            ref other => panic!("expected Failed at page 2, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_error_keeps_earlier_pages() {
        struct FlakySource;

        #[async_trait]
        impl RowSource for FlakySource {
            async fn fetch_rows(&self, page: u32) -> Result<Vec<RawRow>, ScraperError> {
                match page {
                    1 => Ok(vec![valid_row("1", "Sub23 M", "Trail Curto (Sprint)")]),
                    _ => Err(ScraperError::ElementNotFound("ResultadosTable".into())),
                }
            }
        }

        let scrape = collect_runners(&FlakySource, 1).await.unwrap();

        assert_eq!(scrape.runners.len(), 1);
        assert_eq!(scrape.runners[0].group, Group::Sub23M);
        assert_eq!(scrape.runners[0].race, Race::ShortTrail);
        assert!(matches!(scrape.end, ScrapeEnd::Failed { page: 2, .. }));
    }

    #[tokio::test]
    async fn test_start_page_past_data_yields_empty_clean_end() {
        let source = FakeSource::new(vec![vec![valid_row("1", "Seniores F", "Caminhada")]]);

        let scrape = collect_runners(&source, 2).await.unwrap();

        assert!(scrape.runners.is_empty());
        assert_eq!(scrape.end, ScrapeEnd::Exhausted { pages: 0 });
        assert_eq!(source.requested(), [2]);
    }
}
