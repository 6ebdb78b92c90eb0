//! Scripted [`ContentProvider`] for catalog tests.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use marquee_core::model::{DetailsExtras, Movie};
use marquee_core::providers::{ContentProvider, ProviderError};

/// Scripted provider: genres listed in `failing` error out, everything else
/// returns the canned titles.
#[derive(Debug, Default)]
pub struct StubProvider {
    pub movies: Vec<Movie>,
    pub failing: Vec<String>,
    pub details: Option<DetailsExtras>,
    pub details_fail: bool,
    pub calls: AtomicUsize,
    pub queries: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn with_movies(movies: Vec<Movie>) -> Arc<Self> {
        Arc::new(Self {
            movies,
            ..Self::default()
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn movies_by_genre(
        &self,
        genre: &str,
    ) -> Result<Vec<Movie>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(genre.to_string());
        if self.failing.iter().any(|g| g == genre) {
            return Err(ProviderError::ParseError("malformed payload".into()));
        }
        Ok(self.movies.clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        if self.failing.iter().any(|g| g == query) {
            return Err(ProviderError::RateLimited);
        }
        Ok(self.movies.clone())
    }

    async fn movie_details(
        &self,
        _movie: &Movie,
    ) -> Result<Option<DetailsExtras>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.details_fail {
            return Err(ProviderError::InvalidApiKey);
        }
        Ok(self.details.clone())
    }
}

pub fn movie(id: &str, title: &str) -> Movie {
    Movie::new(id, title)
}
