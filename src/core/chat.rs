use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::models::{ChatThread, Message, ThreadSummary};

/// Errors for chat operations
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("no match with id {0}")]
    UnknownMatch(String),
    #[error("message text is empty after trimming")]
    EmptyMessage,
}

/// One message thread per match, with per-thread unread counters.
///
/// The store only accepts match ids that the session has registered after
/// match formation; thread storage itself is lazy and a thread materializes
/// the first time it is opened or written to. If networked delivery is ever
/// added, `append_message` is the unit of mutual exclusion per thread.
#[derive(Debug, Clone, Default)]
pub struct ChatStore {
    threads: HashMap<String, ChatThread>,
    // admitted match ids, in registration order
    registered: Vec<String>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a match id; called by the session when a match is formed
    pub fn register_match(&mut self, match_id: &str) {
        if !self.is_registered(match_id) {
            self.registered.push(match_id.to_string());
        }
    }

    fn is_registered(&self, match_id: &str) -> bool {
        self.registered.iter().any(|id| id == match_id)
    }

    fn ensure_thread(&mut self, match_id: &str) -> Result<&mut ChatThread, ChatError> {
        if !self.is_registered(match_id) {
            return Err(ChatError::UnknownMatch(match_id.to_string()));
        }
        Ok(self
            .threads
            .entry(match_id.to_string())
            .or_insert_with(|| ChatThread::new(match_id)))
    }

    /// Open a thread, creating it on first access. Opening resets the
    /// unread counter to zero.
    pub fn open_thread(&mut self, match_id: &str) -> Result<&ChatThread, ChatError> {
        let thread = self.ensure_thread(match_id)?;
        thread.unread = 0;
        Ok(thread)
    }

    /// Append a message to a thread. Messages from the other party bump the
    /// unread counter; the text is stored trimmed.
    pub fn append_message(
        &mut self,
        match_id: &str,
        text: &str,
        author_is_local: bool,
        message_id: String,
        sent_at: DateTime<Utc>,
    ) -> Result<&Message, ChatError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let thread = self.ensure_thread(match_id)?;
        let seq = thread.next_seq;
        thread.next_seq += 1;
        thread.messages.push(Message {
            message_id,
            match_id: match_id.to_string(),
            author_is_local,
            text: trimmed.to_string(),
            seq,
            sent_at,
        });
        if !author_is_local {
            thread.unread += 1;
        }

        debug!(match_id, seq, author_is_local, "message appended");
        let last = thread.messages.len() - 1;
        Ok(&thread.messages[last])
    }

    pub fn thread(&self, match_id: &str) -> Option<&ChatThread> {
        self.threads.get(match_id)
    }

    pub fn unread_count(&self, match_id: &str) -> u32 {
        self.threads.get(match_id).map(|t| t.unread).unwrap_or(0)
    }

    /// Summaries for every registered match, most recent activity first.
    /// Threads with no messages yet sort last, in registration order.
    pub fn thread_summaries(&self) -> Vec<ThreadSummary> {
        let mut summaries: Vec<ThreadSummary> = self
            .registered
            .iter()
            .map(|match_id| {
                let thread = self.threads.get(match_id);
                let last = thread.and_then(|t| t.last_message());
                ThreadSummary {
                    match_id: match_id.clone(),
                    last_message: last.map(|m| m.text.clone()),
                    last_timestamp: last.map(|m| m.sent_at),
                    unread_count: thread.map(|t| t.unread).unwrap_or(0),
                }
            })
            .collect();

        // None sorts below Some, so empty threads land at the end
        summaries.sort_by(|a, b| b.last_timestamp.cmp(&a.last_timestamp));
        summaries
    }

    /// Drop a thread and its registration (the unmatch path)
    pub fn remove_thread(&mut self, match_id: &str) {
        self.threads.remove(match_id);
        self.registered.retain(|id| id != match_id);
    }
}
