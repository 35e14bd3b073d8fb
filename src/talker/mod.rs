pub mod dto;
pub mod handlers;
pub mod validate;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    // The static "search" segment takes priority over ":id", so a search
    // request is never parsed as an id lookup.
    Router::new()
        .route(
            "/talker",
            get(handlers::list_talkers).post(handlers::create_talker),
        )
        .route("/talker/search", get(handlers::search_talkers))
        .route(
            "/talker/:id",
            get(handlers::get_talker)
                .put(handlers::update_talker)
                .delete(handlers::delete_talker),
        )
}
