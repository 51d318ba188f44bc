pub mod agent;

pub use agent::{normalize_email, Agent};
