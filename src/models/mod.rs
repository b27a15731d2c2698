// Model exports
pub mod domain;
pub mod view;

pub use domain::{ChatThread, Match, Message, Profile, SwipeDecision, SwipeOutcome};
pub use view::{ChatListItem, DiscoverState, MatchView, SessionSnapshot, ThreadSummary, ThreadView, ViewTab};
