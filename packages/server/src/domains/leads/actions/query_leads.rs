//! Lead read actions
//!
//! Reads are open to every authenticated agent; only mutations are scoped by
//! the ownership rule.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::common::{Actor, AgentId, AppError, AppResult, LeadCapability, LeadId};
use crate::domains::agents::models::Agent;
use crate::domains::leads::data::LeadData;
use crate::domains::leads::models::{AgentLead, Lead};

/// List every lead with its assigned agent ids
pub async fn list_leads(pool: &PgPool) -> AppResult<Vec<LeadData>> {
    let mut tx = pool.begin().await?;

    let leads = Lead::find_all(&mut *tx).await?;
    let lead_ids: Vec<LeadId> = leads.iter().map(|lead| lead.id).collect();
    let rows = AgentLead::find_for_leads(&lead_ids, &mut *tx).await?;

    tx.commit().await?;

    let mut agents_by_lead: HashMap<LeadId, Vec<AgentId>> = HashMap::new();
    for row in rows {
        agents_by_lead.entry(row.lead_id).or_default().push(row.agent_id);
    }

    Ok(leads
        .into_iter()
        .map(|lead| {
            let agent_ids = agents_by_lead.remove(&lead.id).unwrap_or_default();
            LeadData::from_parts(lead, agent_ids)
        })
        .collect())
}

/// Fetch a single lead with its assigned agent ids
pub async fn get_lead(lead_id: LeadId, caller: &Agent, pool: &PgPool) -> AppResult<LeadData> {
    let mut tx = pool.begin().await?;

    let lead = Lead::find_by_id(lead_id, &mut *tx)
        .await?
        .ok_or(AppError::NotFound("Lead"))?;
    let agent_ids = AgentLead::agent_ids_for_lead(lead_id, &mut *tx).await?;

    tx.commit().await?;

    let data = LeadData::from_parts(lead, agent_ids);
    Actor::new(caller.id).can(LeadCapability::View).check(&data)?;

    Ok(data)
}
