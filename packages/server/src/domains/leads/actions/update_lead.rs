//! Update lead action - partial update under the ownership rule

use sqlx::PgPool;
use tracing::{debug, info};

use crate::common::{Actor, AppError, AppResult, LeadCapability, LeadId};
use crate::domains::agents::models::Agent;
use crate::domains::leads::data::{LeadData, LeadPatch};
use crate::domains::leads::models::{AgentLead, Lead};

/// Apply a validated patch to a lead.
///
/// Fails with `NotFound` if the lead does not exist and `Forbidden` unless the
/// caller is its creator or an assigned agent. Only supplied fields change.
/// A supplied `agent_ids` replaces the association set, filtered to existing
/// agents the same way create does.
pub async fn update_lead(
    lead_id: LeadId,
    patch: LeadPatch,
    caller: &Agent,
    pool: &PgPool,
) -> AppResult<LeadData> {
    let mut tx = pool.begin().await?;

    let mut lead = Lead::find_by_id(lead_id, &mut *tx)
        .await?
        .ok_or(AppError::NotFound("Lead"))?;
    let current_agents = AgentLead::agent_ids_for_lead(lead_id, &mut *tx).await?;

    let existing = LeadData::from_parts(lead.clone(), current_agents);
    Actor::new(caller.id)
        .can(LeadCapability::Update)
        .check(&existing)?;

    if patch.is_empty() {
        debug!(lead_id = %lead_id, "Empty patch, nothing to write");
        return Ok(existing);
    }

    let original = lead.clone();
    patch.apply(&mut lead);
    let lead = if lead == original {
        debug!(lead_id = %lead_id, "Patch left lead fields unchanged");
        lead
    } else {
        // Removed by a concurrent request after our read
        lead.save(&mut *tx)
            .await?
            .ok_or(AppError::NotFound("Lead"))?
    };

    let agent_ids = match patch.agent_ids() {
        Some(candidates) => {
            let resolved = Agent::existing_ids(candidates, &mut *tx).await?;
            AgentLead::delete_all_for_lead(lead_id, &mut *tx).await?;
            AgentLead::assign_many(lead_id, &resolved, &mut *tx).await?;
            resolved
        }
        None => existing.agent_ids,
    };

    tx.commit().await?;

    info!(lead_id = %lead_id, agent_id = %caller.id, "Lead updated");

    Ok(LeadData::from_parts(lead, agent_ids))
}
