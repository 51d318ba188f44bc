// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod errors;
pub mod id;
pub mod validation;

pub use auth::{Actor, AuthError, HasMembership, LeadCapability};
pub use entity_ids::*;
pub use errors::{AppError, AppResult};
pub use id::Id;
