//! Plain-text and JSON rendering for command results.

use std::fmt::Write;

use anyhow::Result;
use marquee_core::model::prelude::{GenreRow, Movie, MovieDetails};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BrowseView {
    pub hero: Option<Movie>,
    pub rows: Vec<GenreRow>,
}

pub fn json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One line per title: `Title (Year)  8.8  98% match`.
pub fn movie_line(movie: &Movie) -> String {
    let mut line = movie.to_string();
    if movie.rating > 0.0 {
        let _ = write!(line, "  {:.1}", movie.rating);
    }
    if let Some(score) = movie.match_score {
        let _ = write!(line, "  {score}% match");
    }
    line
}

pub fn movie_list(movies: &[Movie]) -> String {
    let mut out = String::new();
    for (idx, movie) in movies.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", idx + 1, movie_line(movie));
        if let Some(poster) = &movie.image_url {
            let _ = writeln!(out, "     {poster}");
        }
    }
    out
}

pub fn row(row: &GenreRow) -> String {
    format!("== {} ==\n{}", row.title, movie_list(&row.movies))
}

pub fn browse(view: &BrowseView) -> String {
    let mut out = String::new();
    if let Some(hero) = &view.hero {
        let _ = writeln!(out, "Featured: {}", movie_line(hero));
        if !hero.description.is_empty() {
            let _ = writeln!(out, "  {}", hero.description);
        }
        if let Ok(images) = hero.resolved_images() {
            let _ = writeln!(out, "  {}", images.hero());
        }
        out.push('\n');
    }
    for genre_row in &view.rows {
        out.push_str(&row(genre_row));
        out.push('\n');
    }
    out
}

pub fn details(details: &MovieDetails) -> String {
    let movie = &details.movie;
    let mut out = String::new();
    let _ = writeln!(out, "{}", movie_line(movie));
    let genres = movie.genre_line();
    if !genres.is_empty() {
        let _ = writeln!(out, "Genre:    {genres}");
    }
    if !movie.director.is_empty() {
        let _ = writeln!(out, "Director: {}", movie.director);
    }
    let _ = writeln!(out, "Cast:     {}", details.cast.join(", "));
    let _ = writeln!(out, "Runtime:  {}", details.duration);
    if !details.mood.is_empty() {
        let _ = writeln!(out, "Mood:     {}", details.mood);
    }
    if !movie.description.is_empty() {
        let _ = writeln!(out, "\n{}", movie.description);
    }
    if let Some(poster) = &movie.image_url {
        let _ = writeln!(out, "\nPoster:   {poster}");
    }
    if let Some(backdrop) = &movie.backdrop_url {
        let _ = writeln!(out, "Backdrop: {backdrop}");
    }
    out
}
