//! User Service Library
//!
//! In-memory user management: the record store with its identifier
//! sequence, and the use-case layer the HTTP gateway calls into.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::repository::InMemoryUserStore;
use crate::service::{UserManager, UserService};

/// Build the user service backed by a fresh, empty store.
pub fn build_service(config: &UserServiceConfig) -> Arc<dyn UserService> {
    let store = Arc::new(InMemoryUserStore::new());
    info!(list_mode = %config.list_mode, "User store initialized");
    Arc::new(UserManager::with_list_mode(store, config.list_mode))
}
