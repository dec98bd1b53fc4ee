use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};

use crate::auth::{
    dto::{LoginRequest, MsgResponse, RegisterRequest, TokenResponse},
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo::User,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Both credentials must be present and non-empty; any non-empty email is
/// accepted as-is and stored case-sensitively.
fn require_credentials(
    email: Option<String>,
    password: Option<String>,
) -> Result<(String, String), ApiError> {
    match (email, password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => Ok((e, p)),
        _ => Err(ApiError::InvalidInput("Email and password required".into())),
    }
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MsgResponse>), ApiError> {
    let (email, password) = require_credentials(payload.email, payload.password)?;

    let hash = hash_password(&password)?;

    let user = User::create(&state.db, &email, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(MsgResponse { msg: "User created" })))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (email, password) = require_credentials(payload.email, payload.password)?;

    // Unknown email and wrong password answer identically.
    let user = match User::find_by_email(&state.db, &email).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "login unknown email");
            return Err(ApiError::Unauthorized("Bad credentials".into()));
        }
    };

    if !verify_password(&password, &user.password_hash) {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized("Bad credentials".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(&user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse { access_token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_empty_email_is_accepted() {
        assert!(require_credentials(Some("user@dishlab.dev".into()), Some("pw".into())).is_ok());
        assert!(require_credentials(Some("a@b".into()), Some("pw".into())).is_ok());
        assert!(require_credentials(Some("not-an-email".into()), Some("pw".into())).is_ok());
    }

    #[test]
    fn missing_or_empty_credentials_are_invalid() {
        for (email, password) in [
            (None, Some("pw".to_string())),
            (Some("a@x.com".to_string()), None),
            (None, None),
            (Some(String::new()), Some("pw".to_string())),
            (Some("a@x.com".to_string()), Some(String::new())),
        ] {
            let err = require_credentials(email, password).err().expect("should reject");
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }
}
