use async_trait::async_trait;
use marquee_model::{DetailsExtras, Movie};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("No API key configured")]
    MissingApiKey,

    #[error("Provider is offline")]
    Offline,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::ParseError(err.to_string())
    }
}

/// Source of catalog titles and detail-view enrichment.
///
/// Implementations report failures faithfully; turning a failure into an empty
/// row is the caller's decision (see [`crate::catalog::CatalogService`]).
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Titles that fit a row heading such as "Dark Comedies".
    async fn movies_by_genre(
        &self,
        genre: &str,
    ) -> Result<Vec<Movie>, ProviderError>;

    /// Titles matching free-text user input.
    async fn search(&self, query: &str) -> Result<Vec<Movie>, ProviderError>;

    /// Cast, runtime and mood for a title. `Ok(None)` means the provider
    /// answered without a payload.
    async fn movie_details(
        &self,
        movie: &Movie,
    ) -> Result<Option<DetailsExtras>, ProviderError>;
}
