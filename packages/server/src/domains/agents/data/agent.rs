use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{password_fits_bcrypt, trimmed_name};
use crate::common::AgentId;
use crate::domains::agents::models::Agent;

/// Public representation of an agent (signup response)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentData {
    pub id: AgentId,
    pub name: String,
    pub email: String,
}

impl From<Agent> for AgentData {
    fn from(agent: Agent) -> Self {
        Self {
            id: agent.id,
            name: agent.name,
            email: agent.email,
        }
    }
}

/// Signup payload
#[derive(Clone, Deserialize, Validate)]
pub struct SignupInput {
    #[validate(custom(function = "trimmed_name"))]
    pub name: String,

    #[validate(
        email(message = "email must be a valid address"),
        length(max = 120, message = "email must be at most 120 characters")
    )]
    pub email: String,

    /// At least 8 characters and at most 72 bytes
    #[validate(
        length(min = 8, message = "password must be at least 8 characters"),
        custom(function = "password_fits_bcrypt")
    )]
    pub password: String,
}

impl std::fmt::Debug for SignupInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
