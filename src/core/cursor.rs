use std::collections::VecDeque;

/// Traversal position over the profile pool.
///
/// The cursor keeps a rotation of pool indices still awaiting a decision.
/// The front of the rotation is the profile currently on screen. Advancing
/// rotates the front to the back, so traversal is cyclic over the undecided
/// profiles; once a profile is decided it is settled out of the rotation and
/// the cursor can reach a genuine exhausted state instead of looping forever.
///
/// With `replay_decided` enabled, settling rotates instead of removing, which
/// reproduces the keep-browsing wraparound over already-decided profiles.
#[derive(Debug, Clone)]
pub struct SwipeCursor {
    rotation: VecDeque<usize>,
    replay_decided: bool,
}

impl SwipeCursor {
    pub fn new(pool_len: usize, replay_decided: bool) -> Self {
        Self {
            rotation: (0..pool_len).collect(),
            replay_decided,
        }
    }

    /// Pool index of the profile currently on screen, none once exhausted
    pub fn current(&self) -> Option<usize> {
        self.rotation.front().copied()
    }

    /// Move to the next profile, wrapping over the rotation
    pub fn advance(&mut self) {
        if let Some(index) = self.rotation.pop_front() {
            self.rotation.push_back(index);
        }
    }

    /// Take the current profile out of rotation after its decision is
    /// recorded. In replay mode the profile stays and the cursor just
    /// advances past it.
    pub fn settle_current(&mut self) {
        if self.replay_decided {
            self.advance();
        } else {
            self.rotation.pop_front();
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.rotation.is_empty()
    }

    /// Number of profiles still in rotation
    pub fn remaining(&self) -> usize {
        self.rotation.len()
    }
}
