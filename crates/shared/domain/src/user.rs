//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned user identifier.
pub type UserId = u64;

/// User domain entity
///
/// Serialized with the camelCase Portuguese field names clients of the
/// `/usuarios` resource expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique, never reused identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: UserId,
    /// Display name
    #[serde(rename = "nome")]
    #[cfg_attr(feature = "openapi", schema(example = "Ana"))]
    pub name: String,
    /// Email address
    #[cfg_attr(feature = "openapi", schema(example = "ana@empresa.com"))]
    pub email: String,
    /// Phone number, if given
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    /// Set on creation and never changed afterwards
    #[serde(rename = "ativo")]
    pub active: bool,
    /// Creation timestamp
    #[serde(rename = "criadoEm")]
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    #[serde(rename = "atualizadoEm")]
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Build a fresh, active record from caller input.
    pub fn new(id: UserId, input: UserInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the contact fields in place.
    ///
    /// `id`, `active` and `created_at` are left alone. `updated_at` never
    /// moves backwards, even if the wall clock does.
    pub fn apply(&mut self, input: UserInput, now: DateTime<Utc>) {
        self.name = input.name;
        self.email = input.email;
        self.phone = input.phone;
        self.updated_at = now.max(self.updated_at);
    }
}

/// Caller-supplied fields for creating or updating a user.
///
/// No validation happens here: missing `nome`/`email` become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserInput {
    /// Display name
    #[serde(rename = "nome", default)]
    #[cfg_attr(feature = "openapi", schema(example = "Ana"))]
    pub name: String,
    /// Email address
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "ana@empresa.com"))]
    pub email: String,
    /// Optional phone number
    #[serde(rename = "telefone", default)]
    #[cfg_attr(feature = "openapi", schema(example = "+55 11 99999-0000"))]
    pub phone: Option<String>,
}

impl UserInput {
    /// Convenience constructor without a phone number
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
        }
    }

    /// Attach a phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}
