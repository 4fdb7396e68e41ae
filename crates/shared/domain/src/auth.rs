//! Login placeholder payloads.

use serde::{Deserialize, Serialize};

use crate::constants::{STUB_LOGIN_EMAIL, STUB_LOGIN_USER_ID, STUB_LOGIN_USER_NAME};
use crate::user::UserId;

/// Login request body. Missing fields read as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginRequest {
    /// Account email
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "admin@empresa.com"))]
    pub email: String,
    /// Account password
    #[serde(rename = "senha", alias = "password", default)]
    #[cfg_attr(feature = "openapi", schema(example = "123456"))]
    pub password: String,
}

/// Successful login payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    /// Opaque, time-derived token. Not a security credential.
    pub token: String,
    #[serde(rename = "usuario")]
    pub user: LoginUser,
}

/// Fixed user descriptor returned by the login placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginUser {
    pub id: UserId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

impl LoginUser {
    /// The hardcoded administrator descriptor
    pub fn admin() -> Self {
        Self {
            id: STUB_LOGIN_USER_ID,
            name: STUB_LOGIN_USER_NAME.to_string(),
            email: STUB_LOGIN_EMAIL.to_string(),
        }
    }
}
