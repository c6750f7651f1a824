//! Route modules and router assembly.

pub mod cards;
pub mod groups;
pub mod search;
pub mod ui;

use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::{delete, get, post, put};
use axum::Router;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Fixed `{"ok":true}` acknowledgement body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub const OK: Self = Self { ok: true };
}

/// Build the complete application router.
///
/// Dispatch precedence matches the API contract: `GET` on the cards and
/// groups resources is open; every other matched API route takes the
/// [`AdminGate`](crate::middleware::AdminGate) extractor and rejects with
/// 403 before its body is read; unmatched method/path combinations fall
/// through to the fixed 404 body without touching the gate.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route(
            "/cards",
            get(cards::list_cards).post(cards::add_or_replace_cards),
        )
        .route(
            "/groups",
            get(groups::list_groups)
                .post(groups::replace_groups)
                .delete(groups::delete_group),
        )
        .route("/update", put(cards::update_card))
        .route("/delete", delete(cards::delete_card))
        .route("/reorder", post(cards::reorder_cards))
        .route("/reset", post(cards::reset_board));

    // Open CORS: any origin, the standard verbs, content-type and
    // authorization headers. The page may be embedded or called from
    // other origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .nest("/api", api)
        .route("/", get(ui::dashboard))
        .route("/search", get(search::search_redirect))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Fixed 404 body for unmatched method/path combinations.
async fn not_found() -> AppError {
    AppError::NotFound("unknown endpoint".to_owned())
}
