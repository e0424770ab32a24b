use crate::lineup::{Assignment, LineupError, LineupPlayer};

#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    PickUp(LineupPlayer),
    /// pointer moved; `None` when it is outside every slot
    Hover(Option<String>),
    Release,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// event has no meaning in the current state
    Ignored,
    InProgress,
    Committed(Assignment),
    /// released on the slot the player already holds
    Unchanged,
    Reverted(RevertReason),
}

impl GestureOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, GestureOutcome::Committed(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RevertReason {
    Incompatible,
    OutsideSlot,
    Cancelled,
    Rejected(LineupError),
}
