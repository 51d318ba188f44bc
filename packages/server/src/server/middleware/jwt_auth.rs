use anyhow::anyhow;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::common::AppError;
use crate::domains::agents::models::Agent;
use crate::domains::auth::authenticate;
use crate::server::app::AxumAppState;

/// Authenticated agent resolved from the bearer token
///
/// Adding this extractor to a handler makes the route protected: the token is
/// verified and the agent re-loaded from the database on every request.
#[derive(Clone, Debug)]
pub struct AuthAgent(pub Agent);

#[async_trait]
impl<S> FromRequestParts<S> for AuthAgent
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = parts
            .extensions
            .get::<AxumAppState>()
            .cloned()
            .ok_or_else(|| AppError::Internal(anyhow!("AxumAppState extension missing")))?;

        let Some(token) = extract_bearer_token(&parts.headers) else {
            debug!("No bearer token on protected route");
            return Err(AppError::Unauthorized);
        };

        let agent = authenticate(token, &state.jwt_service, &state.db_pool).await?;
        debug!(agent_id = %agent.id, "Authenticated agent");

        Ok(Self(agent))
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively; any other scheme, an empty
/// token, or a missing header yields `None`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = auth_str.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_token_with_bearer() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(extract_bearer_token(&headers("bearer abc")), Some("abc"));
        assert_eq!(extract_bearer_token(&headers("BEARER abc")), Some("abc"));
    }

    #[test]
    fn test_raw_token_rejected() {
        assert_eq!(extract_bearer_token(&headers("abc.def.ghi")), None);
    }

    #[test]
    fn test_other_scheme_rejected() {
        assert_eq!(extract_bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
    }

    #[test]
    fn test_empty_token_rejected() {
        assert_eq!(extract_bearer_token(&headers("Bearer ")), None);
        assert_eq!(extract_bearer_token(&headers("Bearer")), None);
    }

    #[test]
    fn test_no_auth_header() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }
}
