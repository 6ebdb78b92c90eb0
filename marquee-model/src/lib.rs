//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod error;
pub mod fetch_state;
pub mod image;
pub mod movie;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use fetch_state::FetchState;
pub use image::{ImageKind, ResolvedImages};
pub use movie::{DetailsExtras, GenreRow, Movie, MovieDetails};
