//! Property listing search and similar-property recommendations over an
//! immutable in-memory catalog, with a small JSON API in front of it.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
