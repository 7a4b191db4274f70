use thiserror::Error;
use weekend_parser::ExtractError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A request that failed in transport or answered with a non-2xx status.
#[derive(Debug, Error)]
#[error("failed to fetch {url}: {source}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub source: BoxError,
}

impl FetchError {
    pub fn new(url: &str, source: impl Into<BoxError>) -> Self {
        Self {
            url: url.to_string(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to read {page}: {source}")]
    Extract {
        page: &'static str,
        #[source]
        source: ExtractError,
    },
    #[error("start page lists {0} link(s), expected calendar, cinema and restaurant")]
    MissingLinks(usize),
}

impl Error {
    pub(crate) fn extract(page: &'static str) -> impl FnOnce(ExtractError) -> Self {
        move |source| Self::Extract { page, source }
    }
}
