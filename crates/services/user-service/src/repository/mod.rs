//! Repository layer for data access.

mod user_repository;

pub use user_repository::{DeleteOutcome, InMemoryUserStore, UserRepository};

#[cfg(test)]
pub use user_repository::MockUserRepository;
