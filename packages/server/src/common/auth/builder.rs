use super::{AuthError, LeadCapability};
use crate::common::entity_ids::AgentId;

/// Entry point for authorization checks
///
/// Usage:
/// ```ignore
/// Actor::new(caller.id)
///     .can(LeadCapability::Update)
///     .check(&lead)?;
/// ```
pub struct Actor {
    actor_id: AgentId,
}

impl Actor {
    /// Create a new actor for authorization checks
    ///
    /// `actor_id` must come from the authorization guard, i.e. a verified token
    /// whose subject resolved to an existing agent.
    pub fn new(actor_id: AgentId) -> Self {
        Self { actor_id }
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: LeadCapability) -> CapabilityBuilder {
        CapabilityBuilder {
            actor_id: self.actor_id,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder {
    actor_id: AgentId,
    capability: LeadCapability,
}

impl CapabilityBuilder {
    /// Perform the authorization check against a resource's membership
    pub fn check<R>(self, resource: &R) -> Result<(), AuthError>
    where
        R: HasMembership,
    {
        check_membership(self.actor_id, self.capability, resource)
    }
}

/// Resources whose mutation is restricted to a creator plus an assigned set
pub trait HasMembership {
    fn created_by(&self) -> AgentId;
    fn members(&self) -> &[AgentId];
}

/// Core ownership rule
///
/// `allowed = actor == created_by || actor ∈ members`
fn check_membership<R>(
    actor_id: AgentId,
    capability: LeadCapability,
    resource: &R,
) -> Result<(), AuthError>
where
    R: HasMembership,
{
    if !capability.requires_membership() {
        return Ok(());
    }

    if resource.created_by() == actor_id || resource.members().contains(&actor_id) {
        return Ok(());
    }

    Err(AuthError::PermissionDenied(format!(
        "only the creator or an assigned agent may {} this lead",
        capability.verb()
    )))
}
