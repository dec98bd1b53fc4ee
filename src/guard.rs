use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;
use crate::state::AppState;

pub fn ensure_writable(read_only: bool) -> Result<(), ApiError> {
    if read_only {
        return Err(ApiError::Forbidden("Read-only environment".into()));
    }
    Ok(())
}

/// Write guard: rejects mutations in read-only deployments.
///
/// Listed before the `Json` body extractor in mutating handlers, so the
/// 403 fires before any payload validation or repository access.
pub struct Writable;

#[async_trait]
impl FromRequestParts<AppState> for Writable {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        ensure_writable(state.config.read_only)?;
        Ok(Writable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn read_only_is_forbidden() {
        let err = ensure_writable(true).unwrap_err();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn writable_passes() {
        assert!(ensure_writable(false).is_ok());
    }
}
