//! Shared application state.
//!
//! One [`AppState`] is constructed at startup and shared across all Axum
//! handlers via `Arc`.

use navdeck_core::auth::AdminToken;
use navdeck_core::board::BoardStore;

/// Shared application state passed to all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// Card and group document store.
    pub board: BoardStore,
    /// The admin shared secret gating mutating routes.
    pub admin: AdminToken,
}
