use std::sync::Arc;

use marquee_core::operator::{Operator, OperatorSession};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::http::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    operator: Operator,
}

/// Login endpoint of the box-office API. The token is an opaque bearer
/// string to this client; only the server encodes or validates it.
pub struct AuthApi {
    api: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Authenticate and attach the session token to the shared client
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<OperatorSession, ApiError> {
        let response: LoginResponse = self
            .api
            .post("/auth/login", &LoginRequest { username, password })
            .await?;
        self.api.set_token(response.access_token.clone());
        info!(username, "operator logged in");
        Ok(OperatorSession::new(response.access_token, response.operator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let response: LoginResponse = serde_json::from_str(
            r#"{
                "access_token": "tok-123",
                "operator": {
                    "id": 4,
                    "name": "Ana Torres",
                    "username": "ana",
                    "email": "ana@example.com",
                    "is_admin": false
                }
            }"#,
        )
        .unwrap();
        assert_eq!(response.access_token, "tok-123");
        assert_eq!(response.operator.username, "ana");
        assert!(!response.operator.is_admin);
    }
}
