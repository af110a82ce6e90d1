use std::time::Duration;

/// Registration list of the event being scraped.
pub const BASE_URL: &str =
    "https://www.trilhoperdido.com/listaInscritos/XI-trilhos-noturnos-dos-templarios";

/// Element id of the results table on each page.
pub const RESULTS_TABLE_ID: &str = "ResultadosTable";

/// Uniform bounded wait applied to element lookups.
pub const ELEMENT_WAIT_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub base_url: String,
    pub headless: bool,
    pub element_wait: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            headless: true,
            element_wait: Duration::from_millis(ELEMENT_WAIT_MS),
        }
    }
}

impl ScraperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_element_wait(mut self, wait: Duration) -> Self {
        self.element_wait = wait;
        self
    }
}
