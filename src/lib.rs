//! Ember Session - client-side state model for the Ember dating app
//!
//! This library owns the state machine behind the swipe screen: profile
//! traversal, match formation, and per-match chat threads. The presentation
//! layer renders the snapshots this core emits and forwards user intents
//! into the [`session::Session`] façade; no component here depends on it.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::core::{ChatError, ChatStore, DecisionLedger, LedgerError, MatchRegistry, PoolError, ProfilePool, SwipeCursor};
pub use crate::models::{DiscoverState, Match, Message, Profile, SessionSnapshot, SwipeDecision, SwipeOutcome, ViewTab};
pub use crate::services::{InMemoryProfileSource, JsonProfileSource, ProfileSource, SequenceIdentity, SystemIdentity};
pub use crate::session::{Session, SessionError};
