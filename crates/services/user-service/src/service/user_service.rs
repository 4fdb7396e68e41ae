//! User service - Handles user-related use cases.
//!
//! Translates repository misses into errors and applies the configured
//! pagination mode to list results.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use common::AppResult;
use domain::{DomainError, Page, UserId, UserInput, UserRecord};

use crate::config::ListMode;
use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user; always succeeds
    async fn create_user(&self, input: UserInput) -> AppResult<UserRecord>;

    /// List users with pagination metadata
    async fn list_users(&self, page: i64, limit: i64) -> AppResult<Page<UserRecord>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<UserRecord>;

    /// Replace name, email and phone of an existing user
    async fn update_user(&self, id: UserId, input: UserInput) -> AppResult<UserRecord>;

    /// Remove a user
    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    list_mode: ListMode,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self::with_list_mode(repo, ListMode::default())
    }

    pub fn with_list_mode(repo: Arc<dyn UserRepository>, list_mode: ListMode) -> Self {
        Self { repo, list_mode }
    }
}

fn not_found(id: UserId) -> DomainError {
    DomainError::not_found(format!("User {id}"))
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: UserInput) -> AppResult<UserRecord> {
        let user = self.repo.create(input).await;
        info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn list_users(&self, page: i64, limit: i64) -> AppResult<Page<UserRecord>> {
        let mut result = self.repo.list(page, limit).await;
        debug!(page, limit, total = result.pagination.total, mode = %self.list_mode, "Listing users");

        if self.list_mode == ListMode::Sliced {
            let window = result.pagination.offset().zip(result.pagination.per_page());
            result.data = match window {
                Some((offset, per_page)) => result
                    .data
                    .into_iter()
                    .skip(offset)
                    .take(per_page)
                    .collect(),
                None => Vec::new(),
            };
        }

        Ok(result)
    }

    async fn get_user(&self, id: UserId) -> AppResult<UserRecord> {
        debug!(user_id = id, "Fetching user");
        Ok(self.repo.find_by_id(id).await.ok_or_else(|| not_found(id))?)
    }

    async fn update_user(&self, id: UserId, input: UserInput) -> AppResult<UserRecord> {
        let user = self
            .repo
            .update(id, input)
            .await
            .ok_or_else(|| not_found(id))?;
        info!(user_id = id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        if !self.repo.delete(id).await.is_removed() {
            return Err(not_found(id).into());
        }
        info!(user_id = id, "User deleted");
        Ok(())
    }
}
