use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{Match, SwipeDecision};

/// Set of current matches, in creation order.
///
/// Matches are formed from single-party acceptance: this core models one
/// local user's view, so there is no reciprocal decision to wait for. A
/// two-party flow would gate formation on both ledgers agreeing.
#[derive(Debug, Clone, Default)]
pub struct MatchRegistry {
    matches: Vec<Match>,
    by_profile: HashMap<String, usize>,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form a match from a decision if the outcome is accepting.
    ///
    /// Idempotent per profile: a profile that already has a match returns
    /// the existing one and `match_id` goes unused. Returns `None` for
    /// rejections.
    pub fn form_match_if_eligible(
        &mut self,
        decision: &SwipeDecision,
        match_id: String,
        created_at: DateTime<Utc>,
    ) -> Option<&Match> {
        if !decision.outcome.is_accepting() {
            return None;
        }

        if let Some(&index) = self.by_profile.get(&decision.profile_id) {
            debug!(profile_id = %decision.profile_id, "match already exists, keeping it");
            return Some(&self.matches[index]);
        }

        let index = self.matches.len();
        self.matches.push(Match {
            match_id,
            profile_id: decision.profile_id.clone(),
            created_at,
        });
        self.by_profile.insert(decision.profile_id.clone(), index);

        Some(&self.matches[index])
    }

    /// All matches in creation order
    pub fn list(&self) -> &[Match] {
        &self.matches
    }

    pub fn get(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.match_id == match_id)
    }

    pub fn contains(&self, match_id: &str) -> bool {
        self.get(match_id).is_some()
    }

    pub fn match_for_profile(&self, profile_id: &str) -> Option<&Match> {
        self.by_profile
            .get(profile_id)
            .map(|&index| &self.matches[index])
    }

    /// Remove a match (the unmatch action). Returns the removed match, or
    /// `None` when the id is unknown.
    pub fn remove(&mut self, match_id: &str) -> Option<Match> {
        let index = self.matches.iter().position(|m| m.match_id == match_id)?;
        let removed = self.matches.remove(index);
        self.by_profile.remove(&removed.profile_id);
        // reindex everything that shifted down
        for (i, m) in self.matches.iter().enumerate().skip(index) {
            self.by_profile.insert(m.profile_id.clone(), i);
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
