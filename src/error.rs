/// Errors surfaced by the fallible parts of the crate.
///
/// The search engine and calendar never fail; these cover parsing of raw
/// values and talking to listing sources.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    #[error("Invalid date '{0}', expected yyyy-MM-dd")]
    InvalidDate(String),

    #[error("Unknown category '{0}', expected buy, rent or shortlet")]
    UnknownCategory(String),

    #[error("Listing source request failed: {0}")]
    Source(#[from] reqwest::Error),

    #[error("Listing source returned status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },
}

pub type Result<T> = std::result::Result<T, FinderError>;
