use serde::{Deserialize, Serialize};

/// Lock state of the wallet session.
///
/// Created `Unlocked` at session start; the coordinator is the only mutator.
/// Not persisted across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockState {
    Unlocked,
    Locked,
}

impl LockState {
    pub fn is_locked(&self) -> bool {
        matches!(self, LockState::Locked)
    }
}
