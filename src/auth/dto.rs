use serde::{Deserialize, Serialize};

/// Request body for login. Fields are optional so that shape validation can
/// answer with the route's own error messages instead of a decode rejection.
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
    pub token: String,
}
