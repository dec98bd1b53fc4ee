pub mod cuisine;
pub mod dto;
pub mod handlers;
pub mod repo;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_receipt))
        .route("/dashboard", get(handlers::dashboard))
        .route(
            "/:id",
            put(handlers::update_receipt).delete(handlers::delete_receipt),
        )
}
