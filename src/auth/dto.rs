use serde::{Deserialize, Serialize};

/// Request body for registration. Fields are optional so missing keys
/// surface as a 400, not a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Request body for login, same shape as registration.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Generic `{"msg": ...}` body used by mutation endpoints.
#[derive(Debug, Serialize)]
pub struct MsgResponse {
    pub msg: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_tolerates_missing_fields() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn token_response_serializes_access_token() {
        let json = serde_json::to_string(&TokenResponse {
            access_token: "abc".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"access_token":"abc"}"#);
    }
}
