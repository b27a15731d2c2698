use thiserror::Error;

use crate::models::Profile;

/// Errors for pool index access
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("index {index} out of range for pool of {len} profiles")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered, read-only collection of candidate profiles for one session.
///
/// Loaded once at session start from a `ProfileSource`; never mutated
/// afterwards. Indices handed out by the cursor stay valid for the whole
/// session lifetime.
#[derive(Debug, Clone, Default)]
pub struct ProfilePool {
    profiles: Vec<Profile>,
}

impl ProfilePool {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile at `index`, failing when the index is outside `[0, len)`
    pub fn at(&self, index: usize) -> Result<&Profile, PoolError> {
        self.profiles.get(index).ok_or(PoolError::OutOfRange {
            index,
            len: self.profiles.len(),
        })
    }

    pub fn by_id(&self, profile_id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.profile_id == profile_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }
}
