use anyhow::Result;
use sqlx::PgExecutor;

use crate::common::{AgentId, LeadId};

/// Row of the `agent_leads` join table
#[derive(sqlx::FromRow, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentLead {
    pub agent_id: AgentId,
    pub lead_id: LeadId,
}

impl AgentLead {
    /// Agent ids assigned to a lead, ascending
    pub async fn agent_ids_for_lead<'e>(
        lead_id: LeadId,
        db: impl PgExecutor<'e>,
    ) -> Result<Vec<AgentId>> {
        sqlx::query_scalar::<_, AgentId>(
            "SELECT agent_id FROM agent_leads WHERE lead_id = $1 ORDER BY agent_id",
        )
        .bind(lead_id)
        .fetch_all(db)
        .await
        .map_err(Into::into)
    }

    /// All association rows for a batch of leads
    pub async fn find_for_leads<'e>(
        lead_ids: &[LeadId],
        db: impl PgExecutor<'e>,
    ) -> Result<Vec<Self>> {
        if lead_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, Self>(
            "SELECT agent_id, lead_id
             FROM agent_leads
             WHERE lead_id = ANY($1)
             ORDER BY lead_id, agent_id",
        )
        .bind(LeadId::to_raw(lead_ids))
        .fetch_all(db)
        .await
        .map_err(Into::into)
    }

    /// Assign agents to a lead; already-present pairs are left alone
    ///
    /// Callers pass ids that were filtered through `Agent::existing_ids`.
    pub async fn assign_many<'e>(
        lead_id: LeadId,
        agent_ids: &[AgentId],
        db: impl PgExecutor<'e>,
    ) -> Result<u64> {
        if agent_ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            "INSERT INTO agent_leads (agent_id, lead_id)
             SELECT agent_id, $2 FROM UNNEST($1::BIGINT[]) AS t(agent_id)
             ON CONFLICT DO NOTHING",
        )
        .bind(AgentId::to_raw(agent_ids))
        .bind(lead_id)
        .execute(db)
        .await?;

        Ok(result.rows_affected())
    }

    /// Remove every association row for a lead
    pub async fn delete_all_for_lead<'e>(lead_id: LeadId, db: impl PgExecutor<'e>) -> Result<u64> {
        let result = sqlx::query("DELETE FROM agent_leads WHERE lead_id = $1")
            .bind(lead_id)
            .execute(db)
            .await?;

        Ok(result.rows_affected())
    }
}
