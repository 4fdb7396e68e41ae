//! Auth Service Library
//!
//! Placeholder login: a single fixed credential pair exchanged for an
//! opaque, time-derived token. There is no session or token validation.

pub mod service;

use std::sync::Arc;

use crate::service::{AuthService, StubAuthenticator};

/// Build the login placeholder service.
pub fn build_service() -> Arc<dyn AuthService> {
    Arc::new(StubAuthenticator::new())
}
