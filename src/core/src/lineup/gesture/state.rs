use crate::lineup::{Compatibility, LineupPlayer};

/// Visual hint while a token hovers over a slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropHint {
    Eligible(Compatibility),
    Rejecting,
}

impl From<Compatibility> for DropHint {
    fn from(compatibility: Compatibility) -> Self {
        if compatibility.is_eligible() {
            DropHint::Eligible(compatibility)
        } else {
            DropHint::Rejecting
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        player: LineupPlayer,
    },
    Hovering {
        player: LineupPlayer,
        slot_id: String,
        hint: DropHint,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn player(&self) -> Option<&LineupPlayer> {
        match self {
            GestureState::Idle => None,
            GestureState::Dragging { player } | GestureState::Hovering { player, .. } => Some(player),
        }
    }

    pub fn hint(&self) -> Option<DropHint> {
        match self {
            GestureState::Hovering { hint, .. } => Some(*hint),
            _ => None,
        }
    }
}
