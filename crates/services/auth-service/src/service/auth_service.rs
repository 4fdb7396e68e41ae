//! Authentication service - fixed-credential login placeholder.
//!
//! Tokens are `jwt-token-exemplo-<epoch millis>`: predictable and unsigned,
//! never accepted anywhere else in the system.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use common::AppResult;
use domain::{
    DomainError, LoginResponse, LoginUser, STUB_LOGIN_EMAIL, STUB_LOGIN_PASSWORD,
    STUB_TOKEN_PREFIX,
};

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a token and user descriptor
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse>;
}

/// Compares against one hardcoded credential pair.
#[derive(Debug, Clone)]
pub struct StubAuthenticator {
    email: &'static str,
    password: &'static str,
}

impl StubAuthenticator {
    pub fn new() -> Self {
        Self {
            email: STUB_LOGIN_EMAIL,
            password: STUB_LOGIN_PASSWORD,
        }
    }

    fn generate_token(&self) -> String {
        format!("{}{}", STUB_TOKEN_PREFIX, Utc::now().timestamp_millis())
    }
}

impl Default for StubAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthService for StubAuthenticator {
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse> {
        if email != self.email || password != self.password {
            warn!(%email, "Login rejected");
            return Err(DomainError::Unauthorized.into());
        }

        info!(%email, "Login accepted");
        Ok(LoginResponse {
            token: self.generate_token(),
            user: LoginUser::admin(),
        })
    }
}
