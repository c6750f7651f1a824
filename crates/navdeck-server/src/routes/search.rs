//! Outbound search redirection: `GET /search`.

use axum::extract::Query;
use axum::response::Redirect;
use serde::Deserialize;

use navdeck_core::search::SearchEngine;

use crate::error::AppError;

/// Query parameters for the search redirect.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The search query.
    pub q: Option<String>,
    /// Engine name (`google`, `bing`, `baidu`); defaults to google.
    pub engine: Option<String>,
    /// Narrow the query to this host via the engine's `site:` operator.
    pub site: Option<String>,
}

/// `GET /search?q=...&engine=...&site=...` — temporary redirect to the
/// engine's result page. Empty query or unknown engine is a 400.
pub async fn search_redirect(
    Query(params): Query<SearchParams>,
) -> Result<Redirect, AppError> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(AppError::BadRequest("query must not be empty".to_owned()));
    }

    let engine = match params.engine.as_deref().filter(|e| !e.is_empty()) {
        Some(name) => name
            .parse::<SearchEngine>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?,
        None => SearchEngine::default(),
    };

    Ok(Redirect::temporary(
        &engine.query_url(query, params.site.as_deref()),
    ))
}
