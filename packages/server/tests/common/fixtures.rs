//! Test fixtures for creating test data.
//!
//! These fixtures go through the same actions the HTTP layer uses.

use anyhow::Result;
use chrono::NaiveDate;
use leads_core::common::AgentId;
use leads_core::domains::agents::{register_agent, Agent, SignupInput};
use leads_core::domains::leads::{create_lead, CreateLeadInput, LeadData};
use sqlx::PgPool;
use uuid::Uuid;

use super::TEST_BCRYPT_COST;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Email that cannot collide with other tests sharing the database
pub fn unique_email(prefix: &str) -> String {
    format!(
        "{}-{}@example.com",
        prefix.replace(' ', "."),
        Uuid::new_v4().simple()
    )
}

/// Register an agent with [`TEST_PASSWORD`]
pub async fn create_test_agent(pool: &PgPool, name: &str) -> Result<Agent> {
    let input = SignupInput {
        name: name.to_string(),
        email: unique_email(&name.to_lowercase()),
        password: TEST_PASSWORD.to_string(),
    };

    Ok(register_agent(input, TEST_BCRYPT_COST, pool).await?)
}

pub fn test_meeting_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date")
}

/// Create a lead owned by `creator` and assigned to `agent_ids`
pub async fn create_test_lead(
    pool: &PgPool,
    creator: &Agent,
    name: &str,
    agent_ids: Vec<AgentId>,
) -> Result<LeadData> {
    let input = CreateLeadInput {
        name: name.to_string(),
        phone_number: Some("555-0100".to_string()),
        service: Some("Consulting".to_string()),
        description: Some("Initial contact".to_string()),
        meeting_date: test_meeting_date(),
        follow_up_date: None,
        agent_ids,
    };

    Ok(create_lead(input, creator, pool).await?)
}
