// Lead Management API - Core
//
// This crate provides the backend API for agents managing sales/service leads.
// Domains own their models and actions; the server module is the HTTP binding.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
