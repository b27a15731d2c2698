use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::core::{
    ChatError, ChatStore, DecisionLedger, LedgerError, MatchRegistry, PoolError, ProfilePool,
    SwipeCursor,
};
use crate::models::{
    ChatListItem, DiscoverState, MatchView, Profile, SessionSnapshot, SwipeOutcome, ThreadView,
    ViewTab,
};
use crate::services::{IdentitySource, LoadError, ProfileSource};

/// Errors surfaced by the session façade
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Top-level façade coordinating the profile pool, swipe cursor, decision
/// ledger, match registry, and chat store for one local user session.
///
/// Every user intent runs to completion synchronously and returns a fresh
/// immutable snapshot for the presentation layer. One instance owns all
/// session state; nothing here is shared or global.
pub struct Session {
    pool: ProfilePool,
    cursor: SwipeCursor,
    ledger: DecisionLedger,
    registry: MatchRegistry,
    chat: ChatStore,
    identity: Box<dyn IdentitySource>,
    settings: Settings,
    active_tab: ViewTab,
    selected_chat: Option<String>,
    local_profile: Option<Profile>,
}

impl Session {
    /// Start a session by loading the candidate pool from a profile source
    pub fn start(
        source: &dyn ProfileSource,
        identity: Box<dyn IdentitySource>,
        settings: Settings,
    ) -> Result<Self, SessionError> {
        let profiles = source.load_profiles()?;
        let cursor = SwipeCursor::new(profiles.len(), settings.traversal.replay_decided);

        info!(
            profiles = profiles.len(),
            replay_decided = settings.traversal.replay_decided,
            "session started"
        );

        Ok(Self {
            pool: ProfilePool::new(profiles),
            cursor,
            ledger: DecisionLedger::new(),
            registry: MatchRegistry::new(),
            chat: ChatStore::new(),
            identity,
            settings,
            active_tab: ViewTab::Discover,
            selected_chat: None,
            local_profile: None,
        })
    }

    /// Attach the local user's own profile (rendered on the profile tab)
    pub fn with_local_profile(mut self, profile: Profile) -> Self {
        self.local_profile = Some(profile);
        self
    }

    /// Reject the profile currently on screen
    pub fn swipe_reject(&mut self) -> Result<SessionSnapshot, SessionError> {
        self.swipe(SwipeOutcome::Rejected)
    }

    /// Accept the profile currently on screen, forming a match
    pub fn swipe_accept(&mut self) -> Result<SessionSnapshot, SessionError> {
        self.swipe(SwipeOutcome::Accepted)
    }

    /// Super-accept the profile currently on screen, forming a match
    pub fn swipe_super(&mut self) -> Result<SessionSnapshot, SessionError> {
        let outcome = if self.settings.matching.super_accept_enabled {
            SwipeOutcome::SuperAccepted
        } else {
            SwipeOutcome::Accepted
        };
        self.swipe(outcome)
    }

    fn swipe(&mut self, outcome: SwipeOutcome) -> Result<SessionSnapshot, SessionError> {
        let Some(index) = self.cursor.current() else {
            warn!("swipe ignored: every profile has been decided");
            return Ok(self.snapshot());
        };
        let profile_id = self.pool.at(index)?.profile_id.clone();
        let decided_at = self.identity.now();

        match self.ledger.record(&profile_id, outcome, decided_at) {
            Ok(decision) => {
                debug!(profile_id = %profile_id, ?outcome, "decision recorded");
                let decision = decision.clone();
                if decision.outcome.is_accepting() {
                    let match_id = self.identity.next_id();
                    let created_at = self.identity.now();
                    if let Some(m) =
                        self.registry
                            .form_match_if_eligible(&decision, match_id, created_at)
                    {
                        let match_id = m.match_id.clone();
                        self.chat.register_match(&match_id);
                        info!(profile_id = %profile_id, match_id = %match_id, "match formed");
                    }
                }
                self.cursor.settle_current();
            }
            // Only reachable in replay mode; the ledger entry stands
            Err(LedgerError::DuplicateDecision(id)) => {
                warn!(profile_id = %id, "ignoring repeat decision");
                self.cursor.advance();
            }
        }

        Ok(self.snapshot())
    }

    /// Open a chat thread, resetting its unread counter
    pub fn open_chat(&mut self, match_id: &str) -> Result<SessionSnapshot, SessionError> {
        self.chat.open_thread(match_id)?;
        self.selected_chat = Some(match_id.to_string());
        self.active_tab = ViewTab::Chats;
        debug!(match_id, "chat opened");
        Ok(self.snapshot())
    }

    /// Leave the open thread and return to the chat list
    pub fn close_chat(&mut self) -> SessionSnapshot {
        self.selected_chat = None;
        self.snapshot()
    }

    /// Send a message from the local user. Blank text is silently dropped,
    /// matching the send button's behavior.
    pub fn send_message(
        &mut self,
        match_id: &str,
        text: &str,
    ) -> Result<SessionSnapshot, SessionError> {
        let message_id = self.identity.next_id();
        let sent_at = self.identity.now();
        match self.chat.append_message(match_id, text, true, message_id, sent_at) {
            Ok(message) => debug!(match_id, seq = message.seq, "message sent"),
            Err(ChatError::EmptyMessage) => debug!(match_id, "blank message dropped"),
            Err(e) => return Err(e.into()),
        }
        Ok(self.snapshot())
    }

    /// Deliver a message from the other party (the transport-facing entry
    /// point). Bumps the thread's unread counter unless the thread is the
    /// one currently open.
    pub fn receive_message(
        &mut self,
        match_id: &str,
        text: &str,
    ) -> Result<SessionSnapshot, SessionError> {
        let message_id = self.identity.next_id();
        let sent_at = self.identity.now();
        self.chat
            .append_message(match_id, text, false, message_id, sent_at)?;
        // A message arriving into the open thread is read immediately
        if self.selected_chat.as_deref() == Some(match_id) {
            self.chat.open_thread(match_id)?;
        }
        Ok(self.snapshot())
    }

    /// Remove a match and its thread
    pub fn unmatch(&mut self, match_id: &str) -> Result<SessionSnapshot, SessionError> {
        let Some(removed) = self.registry.remove(match_id) else {
            return Err(ChatError::UnknownMatch(match_id.to_string()).into());
        };
        self.chat.remove_thread(match_id);
        if self.selected_chat.as_deref() == Some(match_id) {
            self.selected_chat = None;
        }
        info!(match_id, profile_id = %removed.profile_id, "unmatched");
        Ok(self.snapshot())
    }

    /// Switch the active screen
    pub fn switch_view(&mut self, tab: ViewTab) -> SessionSnapshot {
        self.active_tab = tab;
        self.snapshot()
    }

    /// Build the immutable view-state snapshot of the whole session
    pub fn snapshot(&self) -> SessionSnapshot {
        let discover = match self.cursor.current().and_then(|i| self.pool.at(i).ok()) {
            Some(profile) => DiscoverState::Browsing(profile.clone()),
            None => DiscoverState::Exhausted,
        };

        let matches = self
            .registry
            .list()
            .iter()
            .map(|m| {
                let profile = self.pool.by_id(&m.profile_id);
                MatchView {
                    match_id: m.match_id.clone(),
                    profile_id: m.profile_id.clone(),
                    name: profile.map(|p| p.name.clone()).unwrap_or_default(),
                    age: profile.map(|p| p.age).unwrap_or_default(),
                    photo: profile.and_then(|p| p.primary_photo().map(str::to_string)),
                    created_at: m.created_at,
                }
            })
            .collect();

        let chats = self
            .chat
            .thread_summaries()
            .into_iter()
            .map(|summary| {
                let profile = self
                    .registry
                    .get(&summary.match_id)
                    .and_then(|m| self.pool.by_id(&m.profile_id));
                ChatListItem {
                    match_id: summary.match_id,
                    name: profile.map(|p| p.name.clone()).unwrap_or_default(),
                    photo: profile.and_then(|p| p.primary_photo().map(str::to_string)),
                    last_message: summary.last_message,
                    last_timestamp: summary.last_timestamp,
                    unread_count: summary.unread_count,
                }
            })
            .collect();

        let open_thread = self.selected_chat.as_deref().map(|match_id| {
            let profile = self
                .registry
                .get(match_id)
                .and_then(|m| self.pool.by_id(&m.profile_id));
            ThreadView {
                match_id: match_id.to_string(),
                name: profile.map(|p| p.name.clone()).unwrap_or_default(),
                messages: self
                    .chat
                    .thread(match_id)
                    .map(|t| t.messages.clone())
                    .unwrap_or_default(),
            }
        });

        SessionSnapshot {
            active_tab: self.active_tab,
            discover,
            matches,
            chats,
            open_thread,
            local_profile: self.local_profile.clone(),
        }
    }

    // Read-only component access, mainly for assertions in tests

    pub fn pool(&self) -> &ProfilePool {
        &self.pool
    }

    pub fn ledger(&self) -> &DecisionLedger {
        &self.ledger
    }

    pub fn registry(&self) -> &MatchRegistry {
        &self.registry
    }

    pub fn chat_store(&self) -> &ChatStore {
        &self.chat
    }
}
