//! Domain-level constants.
//!
//! These constants define defaults and the fixed login placeholder.

// =============================================================================
// Identifiers
// =============================================================================

/// First identifier handed out by a fresh store
pub const FIRST_USER_ID: u64 = 1;

// =============================================================================
// Pagination
// =============================================================================

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Default number of items per page
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

// =============================================================================
// Authentication placeholder
// =============================================================================

/// The only email accepted by the login stub
pub const STUB_LOGIN_EMAIL: &str = "admin@empresa.com";

/// The only password accepted by the login stub
pub const STUB_LOGIN_PASSWORD: &str = "123456";

/// Identifier reported for the stub login user (unrelated to stored users)
pub const STUB_LOGIN_USER_ID: u64 = 1;

/// Display name reported for the stub login user
pub const STUB_LOGIN_USER_NAME: &str = "Administrador";

/// Prefix of the opaque token returned by the login stub
pub const STUB_TOKEN_PREFIX: &str = "jwt-token-exemplo-";

// =============================================================================
// Health
// =============================================================================

/// Status reported by the health probe
pub const HEALTH_STATUS_UP: &str = "UP";
