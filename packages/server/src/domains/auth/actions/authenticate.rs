//! Authorization guard - resolve a bearer token to an existing agent

use sqlx::PgPool;
use tracing::debug;

use crate::common::AuthError;
use crate::domains::agents::models::Agent;
use crate::domains::auth::jwt::JwtService;

/// Resolve a raw token to the agent it was issued for.
///
/// Fails with `InvalidToken` for malformed, forged, expired or subject-less
/// tokens, and with `AuthenticationRequired` when the subject no longer
/// resolves to an agent row. Nothing is cached; identity is looked up on
/// every call.
pub async fn authenticate(token: &str, jwt_service: &JwtService, pool: &PgPool) -> Result<Agent, AuthError> {
    let agent_id = jwt_service.verify(token)?;

    match Agent::find_by_id(agent_id, pool).await? {
        Some(agent) => Ok(agent),
        None => {
            debug!(agent_id = %agent_id, "Token subject has no agent row");
            Err(AuthError::AuthenticationRequired)
        }
    }
}
