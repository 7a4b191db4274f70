use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document is empty")]
    EmptyDocument,
    #[error("malformed movie listing: {0}")]
    MovieListing(#[from] serde_json::Error),
}
