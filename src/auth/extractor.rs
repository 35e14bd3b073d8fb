use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use super::token::TOKEN_LEN;
use crate::error::ApiError;

/// Shape-checks the `Authorization` header on protected routes. The token
/// carries no identity; only its presence and length are verified. Running
/// as an extractor guarantees the check happens before any body validation.
#[derive(Debug)]
pub struct ApiToken;

#[async_trait]
impl<S> FromRequestParts<S> for ApiToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized("Token não encontrado"))?;

        if token.chars().count() != TOKEN_LEN {
            return Err(ApiError::Unauthorized("Token inválido"));
        }

        Ok(ApiToken)
    }
}
