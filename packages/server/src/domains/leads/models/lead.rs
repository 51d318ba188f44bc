use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgExecutor;

use crate::common::{AgentId, LeadId};

/// Lead model - SQL persistence layer
///
/// `created_by_id` is written once by `create` and never touched by `save`.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub phone_number: Option<String>,
    pub service: Option<String>,
    pub description: Option<String>,
    pub meeting_date: NaiveDate,
    pub follow_up_date: Option<NaiveDate>,
    pub created_by_id: AgentId,
}

impl Lead {
    /// Find lead by ID
    pub async fn find_by_id<'e>(id: LeadId, db: impl PgExecutor<'e>) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(Into::into)
    }

    /// Find all leads, oldest first
    pub async fn find_all<'e>(db: impl PgExecutor<'e>) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM leads ORDER BY id")
            .fetch_all(db)
            .await
            .map_err(Into::into)
    }

    /// Insert a new lead
    #[allow(clippy::too_many_arguments)]
    pub async fn create<'e>(
        name: &str,
        phone_number: Option<&str>,
        service: Option<&str>,
        description: Option<&str>,
        meeting_date: NaiveDate,
        follow_up_date: Option<NaiveDate>,
        created_by_id: AgentId,
        db: impl PgExecutor<'e>,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO leads (
                name,
                phone_number,
                service,
                description,
                meeting_date,
                follow_up_date,
                created_by_id
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(name)
        .bind(phone_number)
        .bind(service)
        .bind(description)
        .bind(meeting_date)
        .bind(follow_up_date)
        .bind(created_by_id)
        .fetch_one(db)
        .await
        .map_err(Into::into)
    }

    /// Persist the mutable fields of this lead
    ///
    /// Returns `None` if the row no longer exists.
    pub async fn save<'e>(&self, db: impl PgExecutor<'e>) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE leads
             SET name = $2,
                 phone_number = $3,
                 service = $4,
                 description = $5,
                 meeting_date = $6,
                 follow_up_date = $7
             WHERE id = $1
             RETURNING *",
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.phone_number)
        .bind(&self.service)
        .bind(&self.description)
        .bind(self.meeting_date)
        .bind(self.follow_up_date)
        .fetch_optional(db)
        .await
        .map_err(Into::into)
    }

    /// Delete lead by ID, returning whether a row was removed
    pub async fn delete<'e>(id: LeadId, db: impl PgExecutor<'e>) -> Result<bool> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
