use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Supplies fresh unique ids and the current time for decisions, matches,
/// and messages
pub trait IdentitySource {
    fn next_id(&mut self) -> String;
    fn now(&mut self) -> DateTime<Utc>;
}

/// Production identity source: random v4 UUIDs and the wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl IdentitySource for SystemIdentity {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }

    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic identity source for tests: sequential ids and a clock that
/// steps forward on every read, so timestamp ordering matches call order
#[derive(Debug, Clone)]
pub struct SequenceIdentity {
    next: u64,
    now: DateTime<Utc>,
    step: Duration,
}

impl SequenceIdentity {
    pub fn new() -> Self {
        Self {
            next: 0,
            now: DateTime::UNIX_EPOCH,
            step: Duration::seconds(1),
        }
    }
}

impl Default for SequenceIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentitySource for SequenceIdentity {
    fn next_id(&mut self) -> String {
        let id = format!("id-{:04}", self.next);
        self.next += 1;
        id
    }

    fn now(&mut self) -> DateTime<Utc> {
        self.now += self.step;
        self.now
    }
}
