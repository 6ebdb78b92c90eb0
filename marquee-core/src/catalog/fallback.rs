//! Static picks shown when the content provider cannot be reached.

use marquee_model::{GenreRow, Movie};

use crate::image::resolve_images;

/// Default row headings, in display order.
pub const GENRES: [&str; 6] = [
    "Trending Now",
    "Sci-Fi & Cyberpunk",
    "High-Octane Action",
    "Mind-Bending Thrillers",
    "Dark Comedies",
    "Award-Winning Dramas",
];

pub const FALLBACK_ROW_TITLE: &str = "Top Picks";

struct FallbackEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    genre: [&'static str; 2],
    year: i32,
    rating: f32,
    director: &'static str,
    match_score: u32,
    poster_path: &'static str,
    backdrop_path: &'static str,
}

// Real TMDB paths so the offline catalog still shows proper artwork.
const FALLBACK_ENTRIES: [FallbackEntry; 5] = [
    FallbackEntry {
        id: "f1",
        title: "Dune: Part Two",
        description: "Paul Atreides unites with Chani and the Fremen while on a warpath of revenge against the conspirators who destroyed his family.",
        genre: ["Sci-Fi", "Adventure"],
        year: 2024,
        rating: 8.9,
        director: "Denis Villeneuve",
        match_score: 98,
        poster_path: "/1pdfLvkbY9ohJlCjQH2CZjjYVvJ.jpg",
        backdrop_path: "/xOMo8BRK7PfcJv9JCnx7s5hj0PX.jpg",
    },
    FallbackEntry {
        id: "f2",
        title: "Inception",
        description: "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
        genre: ["Sci-Fi", "Action"],
        year: 2010,
        rating: 8.8,
        director: "Christopher Nolan",
        match_score: 99,
        poster_path: "/9gk7admal4ZLcnwnCSNMtVVbMEP.jpg",
        backdrop_path: "/s3TBrRGB1jav7nXgG5ulxEXUS3u.jpg",
    },
    FallbackEntry {
        id: "f3",
        title: "Spider-Man: Across the Spider-Verse",
        description: "Miles Morales catapults across the Multiverse, where he encounters a team of Spider-People charged with protecting its very existence.",
        genre: ["Animation", "Action"],
        year: 2023,
        rating: 8.6,
        director: "Joaquim Dos Santos",
        match_score: 97,
        poster_path: "/8Vt6mWEReuy4Of61Lnj5Xj704m8.jpg",
        backdrop_path: "/4HodYYKEIsGOdinkGi2Ucz6X9i0.jpg",
    },
    FallbackEntry {
        id: "f4",
        title: "The Dark Knight",
        description: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
        genre: ["Action", "Crime"],
        year: 2008,
        rating: 9.0,
        director: "Christopher Nolan",
        match_score: 96,
        poster_path: "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
        backdrop_path: "/dqK9UFagCOPa3CMjo515XR_oTEV.jpg",
    },
    FallbackEntry {
        id: "f5",
        title: "Interstellar",
        description: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
        genre: ["Sci-Fi", "Drama"],
        year: 2014,
        rating: 8.7,
        director: "Christopher Nolan",
        match_score: 95,
        poster_path: "/gEU2QniL6E8ahMcafCUYA875DD9.jpg",
        backdrop_path: "/xJHokMBLkbke0umzhT5bCs9n1hw.jpg",
    },
];

impl FallbackEntry {
    fn to_movie(&self) -> Movie {
        Movie {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            genre: self.genre.iter().map(|g| g.to_string()).collect(),
            year: self.year,
            rating: self.rating,
            director: self.director.to_string(),
            match_score: Some(self.match_score),
            image_url: None,
            backdrop_url: None,
            poster_path: Some(self.poster_path.to_string()),
            backdrop_path: Some(self.backdrop_path.to_string()),
        }
    }
}

/// The static picks, unresolved (CDN paths only).
pub fn fallback_movies() -> Vec<Movie> {
    FALLBACK_ENTRIES.iter().map(FallbackEntry::to_movie).collect()
}

/// The static picks as a row, with artwork resolved.
pub fn fallback_row() -> GenreRow {
    GenreRow::new(
        FALLBACK_ROW_TITLE,
        fallback_movies().into_iter().map(resolve_images).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_row_is_fully_resolved_from_cdn() {
        let row = fallback_row();
        assert_eq!(row.movies.len(), 5);
        for movie in &row.movies {
            let images = movie.resolved_images().unwrap();
            assert!(images.poster.starts_with("https://image.tmdb.org/t/p/w500/"));
            assert!(
                images
                    .backdrop
                    .starts_with("https://image.tmdb.org/t/p/original/")
            );
        }
    }

    #[test]
    fn fallback_ids_are_unique() {
        let movies = fallback_movies();
        let mut ids: Vec<_> = movies.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), movies.len());
    }
}
