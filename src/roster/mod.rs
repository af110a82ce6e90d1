//! Registration roster scraping
//!
//! Record schema, page fetching, pagination and participation reporting.

mod pagination;
mod report;
mod scraper;
mod types;

pub use pagination::{collect_runners, RosterScrape, ScrapeEnd};
pub use report::{
    group_matches_gender, Gender, GenderCount, GroupCount, RaceCount, RosterSummary,
};
pub use scraper::RosterScraper;
pub use types::{Group, Paid, Race, RawRow, Runner, COLUMN_COUNT};
