//! Lead domain actions - business logic functions
//!
//! Every action runs in a single transaction: commit on success, rollback
//! (by dropping the transaction) on any error.

mod create_lead;
mod delete_lead;
mod query_leads;
mod update_lead;

pub use create_lead::create_lead;
pub use delete_lead::delete_lead;
pub use query_leads::{get_lead, list_leads};
pub use update_lead::update_lead;
