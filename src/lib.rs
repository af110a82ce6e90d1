//! Trail race roster scraper
//!
//! Walks the paginated registration table of a race website page by page,
//! validates every row against the record schema and reports participation
//! counts by gender, race and competition bracket.
//!
//! # Direct use
//!
//! ```rust,ignore
//! use roster_scraper::{RosterScraper, RosterSummary, Scraper, ScraperConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut scraper = RosterScraper::new(ScraperConfig::default());
//!     let scrape = scraper.execute(1).await.unwrap();
//!     println!("{}", RosterSummary::compute(&scrape.runners));
//! }
//! ```
//!
//! # As a tower Service
//!
//! ```rust,ignore
//! use roster_scraper::{ScrapeRequest, ScraperService};
//! use tower::Service;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut service = ScraperService::new();
//!     let report = service.call(ScrapeRequest::new()).await.unwrap();
//!     println!("{}", report.summary);
//! }
//! ```

pub mod config;
pub mod error;
pub mod roster;
pub mod service;
pub mod traits;

pub use config::ScraperConfig;
pub use error::ScraperError;
pub use roster::{
    collect_runners, Gender, Group, Paid, Race, RawRow, RosterScrape, RosterScraper,
    RosterSummary, Runner, ScrapeEnd,
};
pub use service::{ScrapeReport, ScrapeRequest, ScraperService};
pub use traits::{RowSource, Scraper};
