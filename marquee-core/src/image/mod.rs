//! Artwork URL resolution.
//!
//! Titles arrive from the content provider with some mix of CDN-relative paths
//! and already resolved URLs. [`resolve_images`] turns any such record into one
//! whose `image_url` and `backdrop_url` are both set, preferring the CDN, then
//! whatever URL was already there, then a deterministic placeholder derived
//! from the title.

pub mod document;
pub mod resolver;
pub mod tmdb_image_size;

pub use document::resolve_document;
pub use resolver::{
    ImageResolver, PLACEHOLDER_BASE, placeholder_seed, placeholder_url,
    resolve_images,
};
pub use tmdb_image_size::{TMDB_IMAGE_BASE, TmdbImageSize};
