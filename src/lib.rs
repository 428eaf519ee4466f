//! Aisle Route - item-to-aisle matching and shopping route ordering
//!
//! This library decides which store aisle stocks each item of a free-form
//! shopping list and orders the aisles into a walking route that follows the
//! physical store layout, including mirrored aisle blocks.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, Router, build_route, normalize, similarity, distance::aisle_distance};
pub use models::{CatalogEntry, MatchResult, MatchKind, Route, RouteEntry, MatchingConfig, StoreLayout, MirrorBlock};
