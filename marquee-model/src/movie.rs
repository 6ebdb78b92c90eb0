use std::fmt;

use crate::error::{ModelError, Result};
use crate::image::ResolvedImages;

/// A single catalog title as produced by the content provider.
///
/// Everything except `title` tolerates being absent in provider output, so a
/// partially filled record still deserializes. Image fields come in two
/// flavours: CDN-relative paths (`poster_path`, `backdrop_path`) and fully
/// qualified URLs (`image_url`, `backdrop_url`) that are only guaranteed to be
/// set after resolution.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Movie {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    pub id: String,
    pub title: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    pub description: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    pub genre: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    pub year: i32,
    /// 0-10
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    pub rating: f32,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    pub director: String,
    /// 0-100%
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub match_score: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image_url: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub backdrop_url: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub poster_path: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub backdrop_path: Option<String>,
}

impl Movie {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Both artwork URLs, or [`ModelError::Unresolved`] if either is missing.
    pub fn resolved_images(&self) -> Result<ResolvedImages> {
        match (non_blank(&self.image_url), non_blank(&self.backdrop_url)) {
            (Some(poster), Some(backdrop)) => Ok(ResolvedImages {
                poster: poster.to_string(),
                backdrop: backdrop.to_string(),
            }),
            _ => Err(ModelError::Unresolved {
                title: self.title.clone(),
            }),
        }
    }

    /// Genres joined the way row cards print them.
    pub fn genre_line(&self) -> String {
        self.genre.join(" \u{2022} ")
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year > 0 {
            write!(f, "{} ({})", self.title, self.year)
        } else {
            f.write_str(&self.title)
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Reads an explicit JSON `null` the same way as a missing key.
#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    use serde::Deserialize;

    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Enrichment returned by the provider for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetailsExtras {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    pub cast: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    pub duration: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    pub mood: String,
}

impl DetailsExtras {
    /// The provider answered but had nothing to say.
    pub fn unknown() -> Self {
        Self {
            cast: vec!["Unknown".to_string()],
            duration: "Unknown".to_string(),
            mood: "N/A".to_string(),
        }
    }

    /// The provider could not be reached or returned garbage.
    pub fn unavailable() -> Self {
        Self {
            cast: Vec::new(),
            duration: "N/A".to_string(),
            mood: String::new(),
        }
    }
}

/// A movie merged with its detail-view enrichment.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieDetails {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub movie: Movie,
    pub cast: Vec<String>,
    pub duration: String,
    pub mood: String,
}

impl MovieDetails {
    pub fn new(movie: Movie, extras: DetailsExtras) -> Self {
        let DetailsExtras {
            cast,
            duration,
            mood,
        } = extras;
        Self {
            movie,
            cast,
            duration,
            mood,
        }
    }
}

/// A titled horizontal row of the catalog.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenreRow {
    pub title: String,
    pub movies: Vec<Movie>,
}

impl GenreRow {
    pub fn new(title: impl Into<String>, movies: Vec<Movie>) -> Self {
        Self {
            title: title.into(),
            movies,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_images_requires_both_urls() {
        let mut movie = Movie::new("1", "Heat");
        movie.image_url = Some("https://a/p.jpg".into());
        assert_eq!(
            movie.resolved_images(),
            Err(ModelError::Unresolved {
                title: "Heat".into()
            })
        );

        movie.backdrop_url = Some("https://a/b.jpg".into());
        let images = movie.resolved_images().unwrap();
        assert_eq!(images.poster, "https://a/p.jpg");
        assert_eq!(images.hero(), "https://a/b.jpg");
    }

    #[test]
    fn empty_url_counts_as_unresolved() {
        let mut movie = Movie::new("1", "Heat");
        movie.image_url = Some(String::new());
        movie.backdrop_url = Some("https://a/b.jpg".into());
        assert!(movie.resolved_images().is_err());
    }

    #[test]
    fn display_includes_year_when_known() {
        let mut movie = Movie::new("1", "Alien");
        assert_eq!(movie.to_string(), "Alien");
        movie.year = 1979;
        assert_eq!(movie.to_string(), "Alien (1979)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_sparse_provider_record() {
        let movie: Movie = serde_json::from_str(
            r#"{"title":"Heat","year":1995,"posterPath":"/heat.jpg","matchScore":91}"#,
        )
        .unwrap();
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.year, 1995);
        assert_eq!(movie.poster_path.as_deref(), Some("/heat.jpg"));
        assert_eq!(movie.match_score, Some(91));
        assert!(movie.genre.is_empty());
        assert!(movie.image_url.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn null_fields_read_as_defaults() {
        let movie: Movie = serde_json::from_str(
            r#"{"id":null,"title":"Heat","description":null,"genre":null,
                "year":null,"rating":null,"director":null,"posterPath":null}"#,
        )
        .unwrap();
        assert_eq!(movie, Movie::new("", "Heat"));

        let extras: DetailsExtras =
            serde_json::from_str(r#"{"cast":null,"duration":"2h","mood":null}"#)
                .unwrap();
        assert!(extras.cast.is_empty());
        assert_eq!(extras.duration, "2h");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn details_flatten_movie_fields() {
        let details = MovieDetails::new(
            Movie::new("7", "Se7en"),
            DetailsExtras::unknown(),
        );
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["title"], "Se7en");
        assert_eq!(value["cast"][0], "Unknown");
        assert_eq!(value["mood"], "N/A");
    }
}
