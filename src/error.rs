use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("browser init failed: {0}")]
    BrowserInit(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("invalid page number {0}, pages start at 1")]
    InvalidPageNumber(u32),

    #[error("page {0} returned no rows")]
    EmptyPage(u32),

    #[error("unexpected number of columns, expected {expected}, got {actual}")]
    ColumnCount { expected: usize, actual: usize },

    #[error("invalid {field} value: {value:?}")]
    InvalidEnumValue { field: &'static str, value: String },
}
