//! Client code for sama-index.
//!
//! This crate provides the HTTP page fetcher, pattern extraction for the
//! anime-sama catalogue page layout, the Jikan metadata API client, and
//! the `Catalogue` entity tying them together.

pub mod catalogue;
pub mod extract;
pub mod fetch;
pub mod jikan;
pub mod season;

pub use catalogue::{Catalogue, CatalogueOptions, Category, Lang};
pub use fetch::{FetchConfig, FetchError, HttpFetcher, PageFetcher};
pub use jikan::{AnimeRecord, JikanClient, JikanConfig, JikanError, TitleSearch};
pub use season::Season;
