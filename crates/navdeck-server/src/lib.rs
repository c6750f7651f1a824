//! navdeck HTTP server.
//!
//! Wires the core library and a storage backend into a running Axum server:
//! the JSON API under `/api/*`, the search redirect at `/search`, and the
//! embedded dashboard page at `/`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
