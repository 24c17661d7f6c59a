//! Core types and shared functionality for sama-index.
//!
//! This crate provides:
//! - Per-entity memoization cells with optional expiry
//! - Unified error types
//! - Configuration structures
//! - Title normalization and matching

pub mod cache;
pub mod config;
pub mod error;
pub mod text;

pub use cache::MemoCell;
pub use config::AppConfig;
pub use error::Error;
pub use text::{MatchMode, normalize, titles_match};
