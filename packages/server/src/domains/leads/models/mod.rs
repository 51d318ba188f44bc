pub mod agent_lead;
pub mod lead;

pub use agent_lead::AgentLead;
pub use lead::Lead;
