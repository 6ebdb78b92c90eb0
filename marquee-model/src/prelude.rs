//! Presentation focused snapshot of the types surface.
//! Prefer importing from this module when rendering rows or detail views.

pub use super::fetch_state::FetchState;
pub use super::image::{ImageKind, ResolvedImages};
pub use super::movie::{DetailsExtras, GenreRow, Movie, MovieDetails};
