//! Admin gate.
//!
//! [`AdminGate`] is an extractor taken as the first argument by every
//! mutating handler, so the check runs only on matched mutating routes —
//! unauthenticated reads and unmatched paths never touch it. The caller
//! token comes from the `key` query parameter or an `Authorization:
//! Bearer` header; absence or mismatch rejects with a fixed 403 and
//! stored data stays untouched.

use std::borrow::Cow;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the caller supplied the admin token.
#[derive(Debug, Clone, Copy)]
pub struct AdminGate;

impl FromRequestParts<Arc<AppState>> for AdminGate {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        match caller_token(parts) {
            Some(token) if state.admin.verify(&token) => Ok(Self),
            _ => Err(AppError::Forbidden),
        }
    }
}

/// Extract the caller-supplied token. Query parameter wins over header,
/// matching how the dashboard page calls the API.
fn caller_token(parts: &Parts) -> Option<String> {
    if let Some(token) = parts.uri.query().and_then(token_from_query) {
        return Some(token);
    }
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_owned)
}

fn token_from_query(query: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        pair.strip_prefix("key=")
            .map(|v| urlencoding::decode(v).map_or_else(|_| v.to_owned(), Cow::into_owned))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_key_among_other_params() {
        assert_eq!(
            token_from_query("foo=1&key=secret&bar=2"),
            Some("secret".to_owned())
        );
    }

    #[test]
    fn missing_key_is_none() {
        assert_eq!(token_from_query("foo=1&bar=2"), None);
    }

    #[test]
    fn decodes_percent_encoding() {
        assert_eq!(
            token_from_query("key=a%20b%2Fc"),
            Some("a b/c".to_owned())
        );
    }
}
