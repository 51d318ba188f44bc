// HTTP middleware and request guards
pub mod jwt_auth;

pub use jwt_auth::*;
