pub mod lead;

pub use lead::{CreateLeadInput, LeadData, LeadPatch};
