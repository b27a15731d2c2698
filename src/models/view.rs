use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{Message, Profile};

/// The four screens the presentation layer can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewTab {
    Discover,
    Matches,
    Chats,
    Profile,
}

/// State of the discovery screen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", content = "profile", rename_all = "lowercase")]
pub enum DiscoverState {
    /// A profile is up for a decision
    Browsing(Profile),
    /// Every profile in the pool has been decided
    Exhausted,
}

impl DiscoverState {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DiscoverState::Exhausted)
    }
}

/// One card in the matches grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchView {
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub name: String,
    pub age: u8,
    pub photo: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Per-thread activity summary for the chat list, as kept by the chat store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadSummary {
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "lastMessage")]
    pub last_message: Option<String>,
    #[serde(rename = "lastTimestamp")]
    pub last_timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "unreadCount")]
    pub unread_count: u32,
}

/// One row in the chat list view: a thread summary plus display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatListItem {
    #[serde(rename = "matchId")]
    pub match_id: String,
    pub name: String,
    pub photo: Option<String>,
    #[serde(rename = "lastMessage")]
    pub last_message: Option<String>,
    #[serde(rename = "lastTimestamp")]
    pub last_timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "unreadCount")]
    pub unread_count: u32,
}

/// The currently open conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadView {
    #[serde(rename = "matchId")]
    pub match_id: String,
    pub name: String,
    pub messages: Vec<Message>,
}

/// Immutable view-state snapshot handed to the presentation layer after
/// every user intent. All fields are owned clones of the session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(rename = "activeTab")]
    pub active_tab: ViewTab,
    pub discover: DiscoverState,
    pub matches: Vec<MatchView>,
    pub chats: Vec<ChatListItem>,
    #[serde(rename = "openThread")]
    pub open_thread: Option<ThreadView>,
    #[serde(rename = "localProfile")]
    pub local_profile: Option<Profile>,
}
