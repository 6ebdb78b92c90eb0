//! Catalog rows, hero selection, search and detail enrichment.

pub mod fallback;
pub mod row;
pub mod service;

pub use fallback::{FALLBACK_ROW_TITLE, GENRES, fallback_movies, fallback_row};
pub use row::{CatalogRow, RowEvent, RowState, Transition};
pub use service::{CatalogOptions, CatalogService, DEFAULT_STAGGER_MAX};
