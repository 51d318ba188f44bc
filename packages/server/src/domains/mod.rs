// Business domains
pub mod agents;
pub mod auth;
pub mod leads;
