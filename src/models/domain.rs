use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Candidate profile shown to the local user while browsing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 18, max = 120))]
    pub age: u8,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Profile {
    /// Primary photo used by the match grid and chat list
    pub fn primary_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }
}

/// Outcome of a single swipe on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeOutcome {
    Rejected,
    Accepted,
    SuperAccepted,
}

impl SwipeOutcome {
    /// Whether this outcome makes the profile eligible for a match
    pub fn is_accepting(&self) -> bool {
        matches!(self, SwipeOutcome::Accepted | SwipeOutcome::SuperAccepted)
    }
}

/// One recorded decision; at most one exists per profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeDecision {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub outcome: SwipeOutcome,
    #[serde(rename = "decidedAt")]
    pub decided_at: DateTime<Utc>,
}

/// A profile that became eligible for conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A single chat message, immutable once appended
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "messageId")]
    pub message_id: String,
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "authorIsLocalUser")]
    pub author_is_local: bool,
    pub text: String,
    pub seq: u64,
    #[serde(rename = "sentAt")]
    pub sent_at: DateTime<Utc>,
}

/// Ordered message history for one match plus its unread counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatThread {
    #[serde(rename = "matchId")]
    pub match_id: String,
    pub messages: Vec<Message>,
    pub unread: u32,
    #[serde(rename = "nextSeq")]
    pub next_seq: u64,
}

impl ChatThread {
    pub fn new(match_id: &str) -> Self {
        Self {
            match_id: match_id.to_string(),
            messages: Vec::new(),
            unread: 0,
            next_seq: 0,
        }
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_profile(age: u8) -> Profile {
        Profile {
            profile_id: "p1".to_string(),
            name: "Anna".to_string(),
            age,
            bio: "Yoga and good coffee".to_string(),
            location: "Moscow".to_string(),
            interests: vec!["Travel".to_string(), "Yoga".to_string()],
            photos: vec!["/placeholder.svg".to_string()],
        }
    }

    #[test]
    fn test_profile_validation() {
        assert!(create_profile(25).validate().is_ok());
        assert!(create_profile(15).validate().is_err());
    }

    #[test]
    fn test_outcome_eligibility() {
        assert!(!SwipeOutcome::Rejected.is_accepting());
        assert!(SwipeOutcome::Accepted.is_accepting());
        assert!(SwipeOutcome::SuperAccepted.is_accepting());
    }

    #[test]
    fn test_profile_serde_field_names() {
        let profile = create_profile(25);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"profileId\""));
        assert!(json.contains("\"interests\""));
    }
}
