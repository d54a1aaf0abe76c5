use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::ValidationError;

// Opaque string ids. Empty values are rejected both on construction and on deserialization.
macro_rules! string_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::EmptyId($label));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(VoteId, "vote id");
string_id!(CategoryId, "award_category_id");
string_id!(NominatorId, "nominator_id");
string_id!(NomineeId, "nominee_id");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub id: VoteId,
    pub award_category_id: CategoryId,
    pub nominator_id: NominatorId,
    pub nominee_id: NomineeId,
    #[serde(default)]
    pub nominee_name: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardCategory {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// A vote as submitted, before it is assigned an id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteSubmission {
    pub award_category_id: CategoryId,
    pub nominator_id: NominatorId,
    pub nominee_id: NomineeId,
    #[serde(default)]
    pub nominee_name: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotingStatus {
    pub is_voting_open: bool,
    pub results_visible: bool,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub ends_at: Option<DateTime<Utc>>,
}

impl Vote {
    pub fn new(submission: VoteSubmission) -> Self {
        Self {
            id: VoteId(Uuid::new_v4().to_string()),
            award_category_id: submission.award_category_id,
            nominator_id: submission.nominator_id,
            nominee_id: submission.nominee_id,
            nominee_name: submission.nominee_name,
            reason: submission.reason,
            timestamp: Utc::now(),
        }
    }
}

impl Default for VotingStatus {
    fn default() -> Self {
        Self {
            is_voting_open: false,
            results_visible: false,
            updated_at: Utc::now(),
            updated_by: None,
            ends_at: None,
        }
    }
}

impl VotingStatus {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.ends_at.is_some_and(|ends_at| ends_at < now)
    }
}
