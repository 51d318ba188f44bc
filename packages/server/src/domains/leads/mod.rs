//! Leads domain - lead records and their agent assignments
//!
//! Responsibilities:
//! - CRUD over leads, one transaction per operation
//! - Many-to-many agent assignments through `agent_leads`
//! - Ownership rule on mutation: creator or assigned agent only

pub mod actions;
pub mod data;
pub mod models;

pub use actions::{create_lead, delete_lead, get_lead, list_leads, update_lead};
pub use data::{CreateLeadInput, LeadData, LeadPatch};
pub use models::{AgentLead, Lead};
