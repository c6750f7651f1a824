//! Group routes: list, bulk replace, delete with cascade.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use super::Ack;
use crate::error::AppError;
use crate::middleware::AdminGate;
use crate::state::AppState;

/// `GET /api/groups` — the full group list, in stored order.
pub async fn list_groups(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.board.read_groups().await?))
}

/// `POST /api/groups` — overwrite the group document with the supplied
/// string array. Anything other than an array of strings is a 400.
pub async fn replace_groups(
    _admin: AdminGate,
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Ack>, AppError> {
    let Value::Array(items) = body else {
        return Err(AppError::BadRequest(
            "body must be an array of group names".to_owned(),
        ));
    };
    let groups: Vec<String> = items
        .into_iter()
        .map(|v| v.as_str().map(str::to_owned))
        .collect::<Option<_>>()
        .ok_or_else(|| AppError::BadRequest("group names must be strings".to_owned()))?;
    state.board.replace_groups(groups).await?;
    Ok(Json(Ack::OK))
}

/// `DELETE /api/groups` — remove `{name}` and cascade-remove every card in
/// that group. Succeeds even when the group is already gone.
pub async fn delete_group(
    _admin: AdminGate,
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Ack>, AppError> {
    let Some(name) = body.get("name").and_then(Value::as_str) else {
        return Err(AppError::BadRequest("missing name".to_owned()));
    };
    state.board.delete_group(name).await?;
    Ok(Json(Ack::OK))
}
