//! Card routes: list, add/bulk-replace, update, delete, reorder, reset.
//!
//! Mutating handlers take `serde_json::Value` bodies and validate shape by
//! hand — the contract promises 400 (not a rejection status) for a missing
//! `id` or a non-array `ids`, and `POST /api/cards` is polymorphic over
//! object vs. array bodies.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use navdeck_core::card::{Card, CardDraft, CardPatch};

use super::Ack;
use crate::error::AppError;
use crate::middleware::AdminGate;
use crate::state::AppState;

/// `GET /api/cards` — the full card list, in stored order.
pub async fn list_cards(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Card>>, AppError> {
    Ok(Json(state.board.read_cards().await?))
}

/// `POST /api/cards` — an object body appends one card (201, created
/// entity); an array body replaces the whole document verbatim (200),
/// trusting client-computed order and membership.
pub async fn add_or_replace_cards(
    _admin: AdminGate,
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    match body {
        Value::Array(_) => {
            let cards: Vec<Card> = serde_json::from_value(body)
                .map_err(|e| AppError::BadRequest(format!("invalid cards array: {e}")))?;
            state.board.replace_cards(cards).await?;
            Ok((StatusCode::OK, Json(Ack::OK)).into_response())
        }
        Value::Object(_) => {
            let draft: CardDraft = serde_json::from_value(body)
                .map_err(|e| AppError::BadRequest(format!("invalid card: {e}")))?;
            let card = state.board.add_card(draft).await?;
            Ok((StatusCode::CREATED, Json(card)).into_response())
        }
        _ => Err(AppError::BadRequest(
            "body must be a card object or an array of cards".to_owned(),
        )),
    }
}

/// `PUT /api/update` — shallow-merge `{id, ...fields}` over the matching
/// card. 400 without an id, 404 when the id matches nothing.
pub async fn update_card(
    _admin: AdminGate,
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Card>, AppError> {
    let Some(id) = body.get("id").and_then(Value::as_str).map(str::to_owned) else {
        return Err(AppError::BadRequest("missing id".to_owned()));
    };
    let patch: CardPatch = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("invalid card fields: {e}")))?;
    let card = state.board.update_card(&id, patch).await?;
    Ok(Json(card))
}

/// `DELETE /api/delete` — remove `{id}`. Succeeds even when the id is
/// already gone.
pub async fn delete_card(
    _admin: AdminGate,
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Ack>, AppError> {
    let Some(id) = body.get("id").and_then(Value::as_str) else {
        return Err(AppError::BadRequest("missing id".to_owned()));
    };
    state.board.delete_card(id).await?;
    Ok(Json(Ack::OK))
}

/// `POST /api/reorder` — rebuild the stored list in `{ids:[...]}` order.
/// Unknown ids are dropped silently; a non-array `ids` is a 400.
pub async fn reorder_cards(
    _admin: AdminGate,
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Ack>, AppError> {
    let Some(ids) = body.get("ids").and_then(Value::as_array) else {
        return Err(AppError::BadRequest("ids array required".to_owned()));
    };
    let ids: Vec<String> = ids
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect();
    state.board.reorder_cards(&ids).await?;
    Ok(Json(Ack::OK))
}

/// `POST /api/reset` — drop both documents; the next read re-seeds.
pub async fn reset_board(
    _admin: AdminGate,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Ack>, AppError> {
    state.board.reset().await?;
    Ok(Json(Ack::OK))
}
