use axum::{extract::rejection::JsonRejection, Json};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use super::dto::{LoginRequest, TokenResponse};
use super::token;
use crate::error::ApiError;

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(payload))]
pub async fn login(
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(payload) = payload?;
    let email = match payload.email.as_deref() {
        Some(e) if !e.is_empty() => e,
        _ => return Err(ApiError::Validation(r#"O campo "email" é obrigatório"#)),
    };
    if !is_valid_email(email) {
        warn!(%email, "login rejected: malformed email");
        return Err(ApiError::Validation(
            r#"O "email" deve ter o formato "email@email.com""#,
        ));
    }

    let password = match payload.password.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ApiError::Validation(r#"O campo "password" é obrigatório"#)),
    };
    if password.chars().count() < 6 {
        return Err(ApiError::Validation(
            r#"O "password" deve ter pelo menos 6 caracteres"#,
        ));
    }

    let token = token::generate();
    info!("login token issued");
    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: Option<&str>, password: Option<&str>) -> LoginRequest {
        LoginRequest {
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    async fn login_err(email: Option<&str>, password: Option<&str>) -> &'static str {
        match login(Ok(Json(request(email, password)))).await {
            Err(ApiError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn issues_fresh_16_char_token() {
        let Json(first) = login(Ok(Json(request(Some("ana@email.com"), Some("123456")))))
            .await
            .expect("login should succeed");
        let Json(second) = login(Ok(Json(request(Some("ana@email.com"), Some("123456")))))
            .await
            .expect("login should succeed");

        assert_eq!(first.token.len(), 16);
        assert_ne!(first.token, second.token);
    }

    #[tokio::test]
    async fn rejects_missing_email() {
        assert_eq!(
            login_err(None, Some("123456")).await,
            r#"O campo "email" é obrigatório"#
        );
        assert_eq!(
            login_err(Some(""), Some("123456")).await,
            r#"O campo "email" é obrigatório"#
        );
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        assert_eq!(
            login_err(Some("not-an-email"), Some("123456")).await,
            r#"O "email" deve ter o formato "email@email.com""#
        );
    }

    #[tokio::test]
    async fn undecodable_body_is_400_with_message_shape() {
        use std::sync::Arc;

        use axum::body::{to_bytes, Body};
        use axum::http::{Request, StatusCode};
        use serde_json::json;
        use tower::ServiceExt;

        use crate::app::build_app;
        use crate::state::AppState;
        use crate::store::JsonFileStore;

        let state = AppState::with_store(Arc::new(JsonFileStore::new("/nonexistent/talker.json")));
        let app = build_app(state);

        let request = Request::builder()
            .method("POST")
            .uri("/login")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "email": 42 }).to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), 1024).await.expect("body");
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(value["message"], "Corpo da requisição inválido");
    }

    #[tokio::test]
    async fn rejects_missing_or_short_password() {
        assert_eq!(
            login_err(Some("ana@email.com"), None).await,
            r#"O campo "password" é obrigatório"#
        );
        assert_eq!(
            login_err(Some("ana@email.com"), Some("12345")).await,
            r#"O "password" deve ter pelo menos 6 caracteres"#
        );
    }
}
