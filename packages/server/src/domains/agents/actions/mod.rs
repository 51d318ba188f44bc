//! Agent domain actions - business logic functions
//!
//! Actions are async functions called directly from HTTP handlers. Each one
//! owns its database work and returns `AppResult<T>`.

mod register;

pub use register::register_agent;
