//! Create lead action

use sqlx::PgPool;
use tracing::{debug, info};

use crate::common::AppResult;
use crate::domains::agents::models::Agent;
use crate::domains::leads::data::{CreateLeadInput, LeadData};
use crate::domains::leads::models::{AgentLead, Lead};

/// Create a lead owned by `creator`.
///
/// This action:
/// 1. Inserts the lead with `created_by_id = creator.id`
/// 2. Filters `agent_ids` down to agents that exist (unknown ids are dropped)
/// 3. Writes the association rows
///
/// All three steps share one transaction.
pub async fn create_lead(input: CreateLeadInput, creator: &Agent, pool: &PgPool) -> AppResult<LeadData> {
    let mut tx = pool.begin().await?;

    let lead = Lead::create(
        input.name.trim(),
        input.phone_number.as_deref(),
        input.service.as_deref(),
        input.description.as_deref(),
        input.meeting_date,
        input.follow_up_date,
        creator.id,
        &mut *tx,
    )
    .await?;

    let agent_ids = Agent::existing_ids(&input.agent_ids, &mut *tx).await?;
    if agent_ids.len() < input.agent_ids.len() {
        debug!(
            lead_id = %lead.id,
            requested = input.agent_ids.len(),
            resolved = agent_ids.len(),
            "Dropped unknown or duplicate agent ids"
        );
    }
    AgentLead::assign_many(lead.id, &agent_ids, &mut *tx).await?;

    tx.commit().await?;

    info!(lead_id = %lead.id, created_by = %creator.id, "Lead created");

    Ok(LeadData::from_parts(lead, agent_ids))
}
