//! Login action - exchange email + password for an access token

use anyhow::Context;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::common::{AppError, AppResult};
use crate::domains::agents::models::{normalize_email, Agent};
use crate::domains::auth::jwt::JwtService;
use crate::domains::auth::password::verify_password;
use crate::domains::auth::types::{LoginForm, TokenResponse};

/// Check an email/password pair.
///
/// Unknown email and wrong password both fail with `InvalidCredentials`.
/// There is no lockout; every attempt is checked independently.
pub async fn verify_credentials(email: &str, password: &str, pool: &PgPool) -> AppResult<Agent> {
    let email = normalize_email(email);

    let Some(agent) = Agent::find_by_email(&email, pool).await? else {
        debug!("Login failed: unknown email");
        return Err(AppError::InvalidCredentials);
    };

    let password = password.to_string();
    let hash = agent.hashed_password.clone();
    let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .context("Password verification task panicked")?;

    if !matches {
        debug!(agent_id = %agent.id, "Login failed: wrong password");
        return Err(AppError::InvalidCredentials);
    }

    Ok(agent)
}

/// Verify credentials and issue a bearer token
pub async fn login(form: LoginForm, jwt_service: &JwtService, pool: &PgPool) -> AppResult<TokenResponse> {
    let agent = verify_credentials(&form.username, &form.password, pool).await?;

    let token = jwt_service.create_token(agent.id)?;
    info!(
        agent_id = %agent.id,
        expires_in_minutes = jwt_service.ttl().num_minutes(),
        "Agent logged in"
    );

    Ok(TokenResponse::bearer(token))
}
