use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineupError {
    #[error("Unknown tactic: {tactic_id}")]
    UnknownTactic { tactic_id: String },

    #[error("Snapshot entry {index}: slot '{slot_id}' is not part of tactic '{tactic_id}'")]
    UnknownSlot {
        index: usize,
        slot_id: String,
        tactic_id: String,
    },

    #[error("Slot '{slot_id}' not found in tactic '{tactic_id}'")]
    SlotNotFound { slot_id: String, tactic_id: String },

    #[error("Player '{player_id}' is disabled")]
    PlayerDisabled { player_id: String },

    #[error("Player '{player_id}' is already placed at slot '{slot_id}'")]
    PlayerAlreadyPlaced { player_id: String, slot_id: String },

    #[error("Snapshot entry {index}: player '{player_id}' appears more than once")]
    DuplicatePlayer { index: usize, player_id: String },

    #[error("Snapshot entry {index}: slot '{slot_id}' appears more than once")]
    DuplicateSlot { index: usize, slot_id: String },

    #[error("Snapshot entry {index}: player '{player_id}' is not in the roster")]
    UnresolvedPlayer { index: usize, player_id: String },

    #[error("Roster fetch failed: {reason}")]
    RosterFetchFailed { reason: String },

    #[error("Invalid position catalog: {0}")]
    InvalidCatalog(String),
}

impl LineupError {
    /// Only a failed roster fetch is worth retrying, everything else is a validation failure
    pub fn is_retryable(&self) -> bool {
        matches!(self, LineupError::RosterFetchFailed { .. })
    }

    pub fn roster_fetch_failed(reason: impl Into<String>) -> Self {
        LineupError::RosterFetchFailed {
            reason: reason.into(),
        }
    }
}

pub type LineupResult<T> = Result<T, LineupError>;
