use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationErrors};

use crate::common::validation::{invalid, trimmed_name};
use crate::common::{AgentId, HasMembership, LeadId};
use crate::domains::leads::models::Lead;

const PHONE_MAX: usize = 20;
const SERVICE_MAX: usize = 100;

/// Full lead representation returned by every lead operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeadData {
    pub id: LeadId,
    pub name: String,
    pub phone_number: Option<String>,
    pub service: Option<String>,
    pub description: Option<String>,
    pub meeting_date: NaiveDate,
    pub follow_up_date: Option<NaiveDate>,
    pub created_by_id: AgentId,
    pub agent_ids: Vec<AgentId>,
}

impl LeadData {
    pub fn from_parts(lead: Lead, agent_ids: Vec<AgentId>) -> Self {
        Self {
            id: lead.id,
            name: lead.name,
            phone_number: lead.phone_number,
            service: lead.service,
            description: lead.description,
            meeting_date: lead.meeting_date,
            follow_up_date: lead.follow_up_date,
            created_by_id: lead.created_by_id,
            agent_ids,
        }
    }
}

impl HasMembership for LeadData {
    fn created_by(&self) -> AgentId {
        self.created_by_id
    }

    fn members(&self) -> &[AgentId] {
        &self.agent_ids
    }
}

/// Payload for creating a lead
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLeadInput {
    #[validate(custom(function = "trimmed_name"))]
    pub name: String,

    #[validate(length(max = 20, message = "phone_number must be at most 20 characters"))]
    pub phone_number: Option<String>,

    #[validate(length(max = 100, message = "service must be at most 100 characters"))]
    pub service: Option<String>,

    pub description: Option<String>,

    pub meeting_date: NaiveDate,

    pub follow_up_date: Option<NaiveDate>,

    /// Candidate assignees; ids without an agent row are dropped
    pub agent_ids: Vec<AgentId>,
}

/// Partial update for a lead
///
/// Each field is tri-state: absent leaves the column untouched, `null` clears
/// it (nullable columns only), and a value replaces it. `created_by_id` is
/// deliberately not representable here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub phone_number: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub service: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub meeting_date: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "present")]
    pub follow_up_date: Option<Option<NaiveDate>>,

    /// Replaces the association set when supplied
    #[serde(default, deserialize_with = "present")]
    pub agent_ids: Option<Option<Vec<AgentId>>>,
}

/// Marks a field as present, keeping an explicit `null` distinct from absence
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl LeadPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone_number.is_none()
            && self.service.is_none()
            && self.description.is_none()
            && self.meeting_date.is_none()
            && self.follow_up_date.is_none()
            && self.agent_ids.is_none()
    }

    /// Requested replacement association set, if any
    pub fn agent_ids(&self) -> Option<&[AgentId]> {
        self.agent_ids.as_ref().and_then(|ids| ids.as_deref())
    }

    /// Merge the supplied fields into a lead, leaving the rest untouched
    ///
    /// Must run after `validate`, which rejects `null` for required fields.
    pub fn apply(&self, lead: &mut Lead) {
        if let Some(Some(name)) = &self.name {
            lead.name = name.trim().to_string();
        }
        if let Some(phone_number) = &self.phone_number {
            lead.phone_number = phone_number.clone();
        }
        if let Some(service) = &self.service {
            lead.service = service.clone();
        }
        if let Some(description) = &self.description {
            lead.description = description.clone();
        }
        if let Some(Some(meeting_date)) = self.meeting_date {
            lead.meeting_date = meeting_date;
        }
        if let Some(follow_up_date) = self.follow_up_date {
            lead.follow_up_date = follow_up_date;
        }
    }
}

impl Validate for LeadPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.name {
            Some(None) => errors.add("name", invalid("not_null", "name cannot be null")),
            Some(Some(name)) => {
                if let Err(error) = trimmed_name(name) {
                    errors.add("name", error);
                }
            }
            None => {}
        }
        if let Some(Some(phone)) = &self.phone_number {
            if phone.chars().count() > PHONE_MAX {
                errors.add(
                    "phone_number",
                    invalid("length", "phone_number must be at most 20 characters"),
                );
            }
        }
        if let Some(Some(service)) = &self.service {
            if service.chars().count() > SERVICE_MAX {
                errors.add(
                    "service",
                    invalid("length", "service must be at most 100 characters"),
                );
            }
        }
        if let Some(None) = self.meeting_date {
            errors.add(
                "meeting_date",
                invalid("not_null", "meeting_date cannot be null"),
            );
        }
        if let Some(None) = self.agent_ids {
            errors.add(
                "agent_ids",
                invalid("not_null", "agent_ids cannot be null; send [] to clear"),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
