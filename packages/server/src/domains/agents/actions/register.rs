//! Register agent action - signup with a hashed password

use anyhow::Context;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::common::{AppError, AppResult};
use crate::domains::agents::data::SignupInput;
use crate::domains::agents::models::{normalize_email, Agent};
use crate::domains::auth::password::hash_password;

/// Register a new agent.
///
/// This action:
/// 1. Normalizes the email (trim + lowercase)
/// 2. Hashes the password with bcrypt off the async runtime
/// 3. Inserts the agent, failing with `DuplicateEmail` if the email is taken
///
/// The input is expected to have passed validation already.
pub async fn register_agent(input: SignupInput, bcrypt_cost: u32, pool: &PgPool) -> AppResult<Agent> {
    let email = normalize_email(&input.email);
    let name = input.name.trim().to_string();

    let password = input.password;
    let hashed_password = tokio::task::spawn_blocking(move || hash_password(&password, bcrypt_cost))
        .await
        .context("Password hashing task panicked")??;

    let agent = Agent::create(&name, &email, &hashed_password, pool)
        .await?
        .ok_or_else(|| {
            warn!("Signup rejected: email already registered");
            AppError::DuplicateEmail
        })?;

    info!(agent_id = %agent.id, "Agent registered");

    Ok(agent)
}
