use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{SwipeDecision, SwipeOutcome};

/// Errors when recording decisions
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("profile {0} already has a recorded decision")]
    DuplicateDecision(String),
}

/// Append-only record of every swipe outcome, at most one per profile
#[derive(Debug, Clone, Default)]
pub struct DecisionLedger {
    decisions: Vec<SwipeDecision>,
    by_profile: HashMap<String, usize>,
}

impl DecisionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decision for a profile, rejecting re-decisions
    pub fn record(
        &mut self,
        profile_id: &str,
        outcome: SwipeOutcome,
        decided_at: DateTime<Utc>,
    ) -> Result<&SwipeDecision, LedgerError> {
        if self.by_profile.contains_key(profile_id) {
            return Err(LedgerError::DuplicateDecision(profile_id.to_string()));
        }

        let index = self.decisions.len();
        self.decisions.push(SwipeDecision {
            profile_id: profile_id.to_string(),
            outcome,
            decided_at,
        });
        self.by_profile.insert(profile_id.to_string(), index);

        Ok(&self.decisions[index])
    }

    pub fn decision_for(&self, profile_id: &str) -> Option<&SwipeDecision> {
        self.by_profile
            .get(profile_id)
            .map(|&index| &self.decisions[index])
    }

    pub fn is_decided(&self, profile_id: &str) -> bool {
        self.by_profile.contains_key(profile_id)
    }

    /// All decisions in append order
    pub fn decisions(&self) -> &[SwipeDecision] {
        &self.decisions
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}
