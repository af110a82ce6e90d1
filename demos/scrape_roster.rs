use roster_scraper::{RosterScraper, RosterSummary, Scraper, ScraperConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = ScraperConfig::default().with_headless(true);
    let mut scraper = RosterScraper::new(config);

    println!("=== Roster Scraper ===");

    match scraper.execute(1).await {
        Ok(scrape) => {
            print!("{}", RosterSummary::compute(&scrape.runners));
            println!("Run ended: {:?}", scrape.end);
        }
        Err(e) => {
            eprintln!("error: {}", e);
        }
    }
}
