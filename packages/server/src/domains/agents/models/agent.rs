use anyhow::Result;
use sqlx::PgExecutor;

use crate::common::AgentId;

/// Agent model - SQL persistence layer
///
/// Stores only the bcrypt hash; the plaintext password never reaches this type.
#[derive(sqlx::FromRow, Clone)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub email: String,
    pub hashed_password: String,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Canonical form used for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl Agent {
    /// Find agent by ID
    pub async fn find_by_id<'e>(id: AgentId, db: impl PgExecutor<'e>) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM agents WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(Into::into)
    }

    /// Find agent by (already normalized) email
    pub async fn find_by_email<'e>(email: &str, db: impl PgExecutor<'e>) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM agents WHERE email = $1")
            .bind(email)
            .fetch_optional(db)
            .await
            .map_err(Into::into)
    }

    /// Insert a new agent
    ///
    /// Returns `None` when the email is already taken; no row is written in
    /// that case.
    pub async fn create<'e>(
        name: &str,
        email: &str,
        hashed_password: &str,
        db: impl PgExecutor<'e>,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO agents (name, email, hashed_password)
             VALUES ($1, $2, $3)
             ON CONFLICT (email) DO NOTHING
             RETURNING *",
        )
        .bind(name)
        .bind(email)
        .bind(hashed_password)
        .fetch_optional(db)
        .await
        .map_err(Into::into)
    }

    /// Filter candidate ids down to the ones that exist
    ///
    /// Unknown ids are dropped; duplicates collapse. Result is sorted ascending.
    pub async fn existing_ids<'e>(
        candidates: &[AgentId],
        db: impl PgExecutor<'e>,
    ) -> Result<Vec<AgentId>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_scalar::<_, AgentId>(
            "SELECT id FROM agents WHERE id = ANY($1) ORDER BY id",
        )
        .bind(AgentId::to_raw(candidates))
        .fetch_all(db)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Agent@Example.COM "), "agent@example.com");
    }

    #[test]
    fn test_debug_hides_password_hash() {
        let agent = Agent {
            id: AgentId::from_i64(1),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            hashed_password: "$2b$04$secrethashvalue".to_string(),
        };

        let debug = format!("{:?}", agent);
        assert!(debug.contains("ada@example.com"));
        assert!(!debug.contains("secrethashvalue"));
    }
}
