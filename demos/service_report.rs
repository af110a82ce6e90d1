use roster_scraper::{ScrapeRequest, ScraperService};
use tower::Service;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut service = ScraperService::new();
    let request = ScrapeRequest::new().with_start_page(1).with_headless(true);

    match service.call(request).await {
        Ok(report) => print!("{}", report.summary),
        Err(e) => eprintln!("error: {}", e),
    }
}
