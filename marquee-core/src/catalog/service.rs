use std::{fmt, sync::Arc, time::Duration};

use futures::future::join_all;
use marquee_model::{DetailsExtras, GenreRow, Movie, MovieDetails};
use rand::Rng;
use tracing::{debug, info, warn};

use super::fallback::{FALLBACK_ROW_TITLE, GENRES, fallback_movies};
use super::row::{CatalogRow, RowEvent};
use crate::image::ImageResolver;
use crate::providers::{ContentProvider, ProviderError};

/// Upper bound of the random delay applied before each row fetch.
pub const DEFAULT_STAGGER_MAX: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogOptions {
    /// Row headings, in display order.
    pub genres: Vec<String>,
    /// Spreads row fetches over `[0, stagger_max)`; zero disables it.
    pub stagger_max: Duration,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            genres: GENRES.iter().map(|g| g.to_string()).collect(),
            stagger_max: DEFAULT_STAGGER_MAX,
        }
    }
}

/// Fills catalog rows from a [`ContentProvider`].
///
/// Provider failures never escape this type: a failed row fetch or search
/// becomes an empty result and a warning in the log, and a failed detail
/// lookup falls back to placeholder extras.
#[derive(Clone)]
pub struct CatalogService {
    provider: Arc<dyn ContentProvider>,
    resolver: ImageResolver,
    options: CatalogOptions,
}

impl fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService")
            .field("provider", &self.provider.name())
            .field("resolver", &self.resolver)
            .field("options", &self.options)
            .finish()
    }
}

impl CatalogService {
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            resolver: ImageResolver::default(),
            options: CatalogOptions::default(),
        }
    }

    pub fn with_resolver(mut self, resolver: ImageResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_options(mut self, options: CatalogOptions) -> Self {
        self.options = options;
        self
    }

    pub fn resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    async fn try_fetch_row(
        &self,
        genre: &str,
    ) -> Result<Vec<Movie>, ProviderError> {
        let movies = self.provider.movies_by_genre(genre).await?;
        Ok(movies
            .into_iter()
            .map(|movie| self.resolver.resolve(with_match_score(movie)))
            .collect())
    }

    /// Titles for one row, resolved and scored. Empty on provider failure.
    pub async fn fetch_row(&self, genre: &str) -> Vec<Movie> {
        match self.try_fetch_row(genre).await {
            Ok(movies) => movies,
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    genre,
                    error = %err,
                    "Failed to fetch movies for row"
                );
                Vec::new()
            }
        }
    }

    /// Mounts a row, waits out its stagger delay, then fetches it.
    pub async fn load_row(&self, genre: &str) -> CatalogRow {
        let mut row = CatalogRow::new(genre);
        row.state.transition(RowEvent::Mount);

        let delay = self.stagger_delay();
        if !delay.is_zero() {
            debug!(genre, delay_ms = delay.as_millis() as u64, "Staggering row fetch");
            tokio::time::sleep(delay).await;
        }

        let event = match self.try_fetch_row(genre).await {
            Ok(movies) => RowEvent::Loaded(movies),
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    genre,
                    error = %err,
                    "Failed to fetch movies for row"
                );
                RowEvent::Failed
            }
        };
        row.state.transition(event);

        info!(
            row = %row.title,
            titles = row.movies().len(),
            state = %row.state.fetch_state(),
            "Row loaded"
        );
        row
    }

    /// Loads every configured row concurrently. Output order follows the
    /// configured genre order.
    pub async fn load_rows(&self) -> Vec<CatalogRow> {
        self.load_genres(&self.options.genres).await
    }

    pub async fn load_genres<S: AsRef<str>>(
        &self,
        genres: &[S],
    ) -> Vec<CatalogRow> {
        join_all(genres.iter().map(|genre| self.load_row(genre.as_ref())))
            .await
    }

    /// Search results with artwork resolved. Blank queries short-circuit.
    pub async fn search(&self, query: &str) -> Vec<Movie> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.provider.search(query).await {
            Ok(movies) => movies
                .into_iter()
                .map(|movie| self.resolver.resolve(movie))
                .collect(),
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    query,
                    error = %err,
                    "Search failed"
                );
                Vec::new()
            }
        }
    }

    /// Best search hit for `title`, or a bare record when nothing matches.
    ///
    /// An exact (case-insensitive) title match wins, optionally narrowed by
    /// `year`; otherwise the first hit is used.
    pub async fn lookup(&self, title: &str, year: Option<i32>) -> Movie {
        let mut results = self.search(title).await;
        let wanted = title.trim().to_lowercase();

        let exact = results.iter().position(|movie| {
            movie.title.to_lowercase() == wanted
                && year.is_none_or(|y| movie.year == y)
        });

        match exact {
            Some(idx) => results.swap_remove(idx),
            None if !results.is_empty() => results.swap_remove(0),
            None => {
                let mut movie = Movie::new(String::new(), title.trim());
                movie.year = year.unwrap_or_default();
                self.resolver.resolve(movie)
            }
        }
    }

    /// Enriches `movie` for the detail view and re-resolves its artwork.
    pub async fn details(&self, movie: Movie) -> MovieDetails {
        let extras = match self.provider.movie_details(&movie).await {
            Ok(Some(extras)) => extras,
            Ok(None) => DetailsExtras::unknown(),
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    title = %movie.title,
                    error = %err,
                    "Failed to load movie details"
                );
                DetailsExtras::unavailable()
            }
        };

        MovieDetails::new(self.resolver.resolve(movie), extras)
    }

    /// The static picks with this service's resolver applied.
    pub fn fallback_row(&self) -> GenreRow {
        GenreRow::new(
            FALLBACK_ROW_TITLE,
            fallback_movies()
                .into_iter()
                .map(|movie| self.resolver.resolve(movie))
                .collect(),
        )
    }

    /// First title of the first populated row, else the first static pick.
    pub fn hero(&self, rows: &[CatalogRow]) -> Option<Movie> {
        rows.iter()
            .find_map(|row| row.movies().first())
            .cloned()
            .or_else(|| {
                fallback_movies()
                    .into_iter()
                    .next()
                    .map(|movie| self.resolver.resolve(movie))
            })
    }

    fn stagger_delay(&self) -> Duration {
        if self.options.stagger_max.is_zero() {
            return Duration::ZERO;
        }
        let fraction: f64 = rand::rng().random();
        self.options.stagger_max.mul_f64(fraction)
    }
}

/// Keeps a provider supplied score, otherwise picks one in `80..100`.
fn with_match_score(mut movie: Movie) -> Movie {
    if movie.match_score.is_none_or(|score| score == 0) {
        movie.match_score = Some(rand::rng().random_range(80..100));
    }
    movie
}
