//! Delete lead action - permanent removal under the ownership rule

use sqlx::PgPool;
use tracing::info;

use crate::common::{Actor, AppError, AppResult, LeadCapability, LeadId};
use crate::domains::agents::models::Agent;
use crate::domains::leads::data::LeadData;
use crate::domains::leads::models::{AgentLead, Lead};

/// Delete a lead and all of its association rows atomically.
///
/// Fails with `NotFound` / `Forbidden` exactly like `update_lead`.
pub async fn delete_lead(lead_id: LeadId, caller: &Agent, pool: &PgPool) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let lead = Lead::find_by_id(lead_id, &mut *tx)
        .await?
        .ok_or(AppError::NotFound("Lead"))?;
    let agent_ids = AgentLead::agent_ids_for_lead(lead_id, &mut *tx).await?;

    Actor::new(caller.id)
        .can(LeadCapability::Delete)
        .check(&LeadData::from_parts(lead, agent_ids))?;

    let unassigned = AgentLead::delete_all_for_lead(lead_id, &mut *tx).await?;
    if !Lead::delete(lead_id, &mut *tx).await? {
        // Removed by a concurrent request after our read
        return Err(AppError::NotFound("Lead"));
    }

    tx.commit().await?;

    info!(lead_id = %lead_id, agent_id = %caller.id, unassigned, "Lead deleted");

    Ok(())
}
