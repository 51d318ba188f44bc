use axum::{extract::Extension, http::StatusCode, Json};

use crate::common::{AppResult, LeadId};
use crate::domains::leads::{
    create_lead, delete_lead, get_lead, list_leads, update_lead, CreateLeadInput, LeadData,
    LeadPatch,
};
use crate::server::app::AxumAppState;
use crate::server::extract::{ValidatedJson, ValidatedPath};
use crate::server::middleware::AuthAgent;

/// `POST /leads`
pub async fn create_lead_handler(
    Extension(state): Extension<AxumAppState>,
    AuthAgent(agent): AuthAgent,
    ValidatedJson(input): ValidatedJson<CreateLeadInput>,
) -> AppResult<Json<LeadData>> {
    let lead = create_lead(input, &agent, &state.db_pool).await?;
    Ok(Json(lead))
}

/// `GET /leads`
pub async fn list_leads_handler(
    Extension(state): Extension<AxumAppState>,
    AuthAgent(_agent): AuthAgent,
) -> AppResult<Json<Vec<LeadData>>> {
    let leads = list_leads(&state.db_pool).await?;
    Ok(Json(leads))
}

/// `GET /leads/{id}`
pub async fn get_lead_handler(
    Extension(state): Extension<AxumAppState>,
    AuthAgent(agent): AuthAgent,
    ValidatedPath(lead_id): ValidatedPath<LeadId>,
) -> AppResult<Json<LeadData>> {
    let lead = get_lead(lead_id, &agent, &state.db_pool).await?;
    Ok(Json(lead))
}

/// `PUT /leads/{id}`
pub async fn update_lead_handler(
    Extension(state): Extension<AxumAppState>,
    AuthAgent(agent): AuthAgent,
    ValidatedPath(lead_id): ValidatedPath<LeadId>,
    ValidatedJson(patch): ValidatedJson<LeadPatch>,
) -> AppResult<Json<LeadData>> {
    let lead = update_lead(lead_id, patch, &agent, &state.db_pool).await?;
    Ok(Json(lead))
}

/// `DELETE /leads/{id}`
pub async fn delete_lead_handler(
    Extension(state): Extension<AxumAppState>,
    AuthAgent(agent): AuthAgent,
    ValidatedPath(lead_id): ValidatedPath<LeadId>,
) -> AppResult<StatusCode> {
    delete_lead(lead_id, &agent, &state.db_pool).await?;
    Ok(StatusCode::NO_CONTENT)
}
