//! Prompt text and response schemas sent to the generative model.

use serde_json::{Value, json};

/// Number of titles requested per row or search.
pub const TITLES_PER_REQUEST: usize = 12;

pub fn genre_prompt(genre: &str) -> String {
    format!(
        "Generate a list of {TITLES_PER_REQUEST} real, popular movies that fit the genre \"{genre}\".\n\
         You MUST provide the correct TMDB 'poster_path' (e.g. \"/uXDfjJbdP4ijW5hWSBrPrlKpxab.jpg\") and 'backdrop_path' for each movie.\n\
         If you are not 100% sure of the path, do not invent one, but try to be accurate for famous movies.\n\
         Return JSON data."
    )
}

pub fn search_prompt(query: &str) -> String {
    format!(
        "User is searching for: \"{query}\".\n\
         Generate a list of {TITLES_PER_REQUEST} movies that best match this query.\n\
         Prioritize real movies and provide their correct TMDB poster_path and backdrop_path.\n\
         Return JSON."
    )
}

pub fn details_prompt(title: &str, year: i32) -> String {
    format!(
        "Generate detailed metadata for the movie \"{title}\" ({year}).\n\
         Include a 'cast' array (3 names), a 'duration' string (e.g., \"1h 45m\"), and a 'mood' string."
    )
}

/// Array-of-movies schema shared by the genre and search requests.
pub fn movie_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "genre": { "type": "ARRAY", "items": { "type": "STRING" } },
                "year": { "type": "INTEGER" },
                "rating": { "type": "NUMBER" },
                "director": { "type": "STRING" },
                "matchScore": { "type": "INTEGER" },
                "posterPath": {
                    "type": "STRING",
                    "description": "The TMDB poster path starting with /"
                },
                "backdropPath": {
                    "type": "STRING",
                    "description": "The TMDB backdrop path starting with /"
                }
            },
            "required": ["title"]
        }
    })
}

pub fn details_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "cast": { "type": "ARRAY", "items": { "type": "STRING" } },
            "duration": { "type": "STRING" },
            "mood": { "type": "STRING" }
        }
    })
}
