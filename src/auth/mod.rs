pub mod dto;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod repo;

use axum::{routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
}
