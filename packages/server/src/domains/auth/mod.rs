//! Auth domain - password login and bearer-token identity
//!
//! Responsibilities:
//! - Credential verification against bcrypt hashes
//! - Access token issuing and verification (JWT, HS256)
//! - Resolving a bearer token to an existing agent on every request

pub mod actions;
pub mod jwt;
pub mod password;
pub mod types;

pub use actions::{authenticate, login, verify_credentials};
pub use jwt::{Claims, JwtService};
pub use types::{LoginForm, TokenResponse};
