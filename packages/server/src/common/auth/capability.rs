/// Capabilities an authenticated agent can request on a lead
///
/// Reading is open to every authenticated agent; mutation is scoped to the
/// lead's creator and its assigned agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadCapability {
    /// List or fetch leads
    View,

    /// Change lead fields or its agent assignments
    Update,

    /// Permanently remove the lead
    Delete,
}

impl LeadCapability {
    /// Check if this capability is limited to the creator and assigned agents
    pub fn requires_membership(&self) -> bool {
        !matches!(self, LeadCapability::View)
    }

    pub fn verb(&self) -> &'static str {
        match self {
            LeadCapability::View => "view",
            LeadCapability::Update => "update",
            LeadCapability::Delete => "delete",
        }
    }
}
