use marquee_model::{ImageKind, Movie};
use once_cell::sync::Lazy;

use super::tmdb_image_size::{TMDB_IMAGE_BASE, TmdbImageSize};

/// Root of the placeholder image service.
pub const PLACEHOLDER_BASE: &str = "https://picsum.photos";

static DEFAULT_RESOLVER: Lazy<ImageResolver> = Lazy::new(ImageResolver::default);

/// Resolves poster and backdrop URLs for catalog titles.
///
/// Precedence for each slot is: CDN path (only when it starts with `/`), then
/// the URL already on the record, then a placeholder seeded by the title.
/// Resolution never fails and running it again on its own output is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    tmdb_base: String,
    placeholder_base: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(TMDB_IMAGE_BASE, PLACEHOLDER_BASE)
    }
}

impl ImageResolver {
    pub fn new(
        tmdb_base: impl Into<String>,
        placeholder_base: impl Into<String>,
    ) -> Self {
        Self {
            tmdb_base: trim_base(tmdb_base.into()),
            placeholder_base: trim_base(placeholder_base.into()),
        }
    }

    pub fn tmdb_base(&self) -> &str {
        &self.tmdb_base
    }

    pub fn placeholder_base(&self) -> &str {
        &self.placeholder_base
    }

    /// Returns `movie` with both `image_url` and `backdrop_url` populated.
    pub fn resolve(&self, movie: Movie) -> Movie {
        let poster = self.resolve_slot(
            &movie.title,
            ImageKind::Poster,
            movie.poster_path.as_deref(),
            movie.image_url.as_deref(),
        );
        let backdrop = self.resolve_slot(
            &movie.title,
            ImageKind::Backdrop,
            movie.backdrop_path.as_deref(),
            movie.backdrop_url.as_deref(),
        );

        Movie {
            image_url: Some(poster),
            backdrop_url: Some(backdrop),
            ..movie
        }
    }

    /// Placeholder URL of the form `<base>/seed/<seed>/<width>/<height>`.
    pub fn placeholder_url(&self, title: &str, kind: ImageKind) -> String {
        let (width, height) = kind.placeholder_dimensions();
        format!(
            "{}/seed/{}/{}/{}",
            self.placeholder_base,
            placeholder_seed(title),
            width,
            height
        )
    }

    fn resolve_slot(
        &self,
        title: &str,
        kind: ImageKind,
        cdn_path: Option<&str>,
        existing: Option<&str>,
    ) -> String {
        if let Some(path) = cdn_path.filter(|p| p.starts_with('/')) {
            return TmdbImageSize::for_kind(kind).url(&self.tmdb_base, path);
        }

        match existing.filter(|url| !url.is_empty()) {
            Some(url) => url.to_string(),
            None => self.placeholder_url(title, kind),
        }
    }
}

fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}

/// Keeps only the ASCII letters and digits of `title`.
///
/// The result may be empty; the placeholder service accepts an empty seed.
pub fn placeholder_seed(title: &str) -> String {
    title.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// [`ImageResolver::placeholder_url`] against the default placeholder service.
pub fn placeholder_url(title: &str, kind: ImageKind) -> String {
    DEFAULT_RESOLVER.placeholder_url(title, kind)
}

/// [`ImageResolver::resolve`] against the default CDN and placeholder service.
pub fn resolve_images(movie: Movie) -> Movie {
    DEFAULT_RESOLVER.resolve(movie)
}
