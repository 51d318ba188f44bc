//! Agents domain - the credential store
//!
//! Responsibilities:
//! - Agent signup with a unique email
//! - Salted password hashes (bcrypt), never plaintext
//! - Bulk existence filtering for lead assignments

pub mod actions;
pub mod data;
pub mod models;

pub use actions::register_agent;
pub use data::{AgentData, SignupInput};
pub use models::Agent;
