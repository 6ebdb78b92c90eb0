use async_trait::async_trait;
use marquee_model::{DetailsExtras, Movie};

use super::traits::{ContentProvider, ProviderError};

/// Provider used when no model backend is configured or `--offline` is set.
///
/// Every call fails with [`ProviderError::Offline`], so rows end up empty and
/// the catalog falls back to its static picks.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineProvider;

#[async_trait]
impl ContentProvider for OfflineProvider {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn movies_by_genre(
        &self,
        _genre: &str,
    ) -> Result<Vec<Movie>, ProviderError> {
        Err(ProviderError::Offline)
    }

    async fn search(&self, _query: &str) -> Result<Vec<Movie>, ProviderError> {
        Err(ProviderError::Offline)
    }

    async fn movie_details(
        &self,
        _movie: &Movie,
    ) -> Result<Option<DetailsExtras>, ProviderError> {
        Err(ProviderError::Offline)
    }
}
