pub mod dto;
pub mod extractor;
pub mod handlers;
mod token;

use axum::{routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(handlers::login))
}
