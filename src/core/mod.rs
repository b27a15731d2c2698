// Core state machine exports
pub mod chat;
pub mod cursor;
pub mod ledger;
pub mod pool;
pub mod registry;

pub use chat::{ChatError, ChatStore};
pub use cursor::SwipeCursor;
pub use ledger::{DecisionLedger, LedgerError};
pub use pool::{PoolError, ProfilePool};
pub use registry::MatchRegistry;
