//! # Marquee Core
//!
//! Core library for Marquee, a streaming-catalog front end whose rows are
//! filled by a generative text model.
//!
//! ## Overview
//!
//! - **Image resolution**: deterministic poster/backdrop URL policy (CDN path,
//!   then existing URL, then a title-seeded placeholder)
//! - **Content providers**: trait-based source of titles, with a Gemini
//!   implementation and an offline stand-in
//! - **Catalog**: row loading with per-row display state, hero selection,
//!   search, detail enrichment and static fallback picks
//!
//! ## Examples
//!
//! ```
//! use marquee_core::image::resolve_images;
//! use marquee_core::model::Movie;
//!
//! let mut movie = Movie::new("1", "Face/Off");
//! movie.poster_path = Some("/faceoff.jpg".to_string());
//!
//! let resolved = resolve_images(movie);
//! assert_eq!(
//!     resolved.image_url.as_deref(),
//!     Some("https://image.tmdb.org/t/p/w500/faceoff.jpg")
//! );
//! assert_eq!(
//!     resolved.backdrop_url.as_deref(),
//!     Some("https://picsum.photos/seed/FaceOff/1280/720")
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Catalog rows, hero, search and details
pub mod catalog;

/// Error types and error handling utilities
pub mod error;

/// Artwork URL resolution
pub mod image;

/// External content providers (Gemini integration)
pub mod providers;

pub use marquee_model as model;

pub use catalog::{CatalogOptions, CatalogService};
pub use error::{CatalogError, Result};
pub use image::{ImageResolver, placeholder_url, resolve_images};
pub use providers::{ContentProvider, ProviderError};
