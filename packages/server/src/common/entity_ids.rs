//! Typed ID definitions for all domain entities.
//!
//! ```rust
//! use leads_core::common::{AgentId, LeadId};
//!
//! let agent_id = AgentId::from_i64(1);
//! let lead_id = LeadId::from_i64(1);
//!
//! // This would be a compile error:
//! // let wrong: LeadId = agent_id;
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Agent entities (authenticated users).
pub struct Agent;

/// Marker type for Lead entities (tracked opportunities).
pub struct Lead;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Agent entities.
pub type AgentId = Id<Agent>;

/// Typed ID for Lead entities.
pub type LeadId = Id<Lead>;
