//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user-service, auth-service and gateway crates all speak these types.

pub mod auth;
pub mod constants;
pub mod error;
pub mod pagination;
pub mod user;

pub use auth::{LoginRequest, LoginResponse, LoginUser};
pub use constants::*;
pub use error::DomainError;
pub use pagination::{Page, PageMeta};
pub use user::{UserId, UserInput, UserRecord};
