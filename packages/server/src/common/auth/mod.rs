/// Authorization module for the leads API
///
/// Provides a fluent API for ownership checks in action code:
///
/// ```ignore
/// use crate::common::auth::{Actor, LeadCapability};
///
/// Actor::new(caller_id)
///     .can(LeadCapability::Delete)
///     .check(&lead)?;
/// ```
///
/// The check runs after the lead is loaded inside the action's transaction,
/// so NotFound is always reported before Forbidden.

mod builder;
mod capability;
mod errors;

pub use builder::{Actor, CapabilityBuilder, HasMembership};
pub use capability::LeadCapability;
pub use errors::AuthError;
