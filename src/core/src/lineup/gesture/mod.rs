mod event;
mod listener;
mod state;

pub use event::*;
pub use listener::*;
pub use state::*;

use crate::lineup::{FormationBoard, LineupPlayer};
use log::debug;

/// Drives one drag gesture at a time against a formation board
#[derive(Debug, Default)]
pub struct AssignmentStateMachine {
    state: GestureState,
}

impl AssignmentStateMachine {
    pub fn new() -> Self {
        AssignmentStateMachine {
            state: GestureState::Idle,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    pub fn handle(
        &mut self,
        event: GestureEvent,
        board: &mut FormationBoard,
        listener: &mut dyn SlotChangeListener,
    ) -> GestureOutcome {
        let state = std::mem::take(&mut self.state);

        match (state, event) {
            (GestureState::Idle, GestureEvent::PickUp(player)) => {
                if !player.enabled {
                    debug!("gesture: disabled player {} cannot be picked up", player.id);
                    return GestureOutcome::Ignored;
                }

                self.state = GestureState::Dragging { player };
                GestureOutcome::InProgress
            }
            (GestureState::Idle, _) => GestureOutcome::Ignored,

            // only one gesture in flight
            (state, GestureEvent::PickUp(_)) => {
                self.state = state;
                GestureOutcome::Ignored
            }

            (_, GestureEvent::Cancel) => {
                debug!("gesture: cancelled");
                GestureOutcome::Reverted(RevertReason::Cancelled)
            }

            (
                GestureState::Dragging { player } | GestureState::Hovering { player, .. },
                GestureEvent::Hover(slot_id),
            ) => {
                self.state = Self::hover(player, slot_id, board);
                GestureOutcome::InProgress
            }

            (GestureState::Dragging { player }, GestureEvent::Release) => {
                debug!("gesture: {} released outside any slot", player.id);
                GestureOutcome::Reverted(RevertReason::OutsideSlot)
            }

            (GestureState::Hovering { player, slot_id, .. }, GestureEvent::Release) => {
                Self::drop_on(player, &slot_id, board, listener)
            }
        }
    }

    fn hover(player: LineupPlayer, slot_id: Option<String>, board: &FormationBoard) -> GestureState {
        let slot = slot_id.as_deref().and_then(|id| board.tactic().slot(id));

        match slot {
            Some(slot) => {
                let hint = DropHint::from(slot.compatibility(&player.position_code));
                GestureState::Hovering {
                    slot_id: slot.slot_id.clone(),
                    player,
                    hint,
                }
            }
            None => GestureState::Dragging { player },
        }
    }

    fn drop_on(
        player: LineupPlayer,
        slot_id: &str,
        board: &mut FormationBoard,
        listener: &mut dyn SlotChangeListener,
    ) -> GestureOutcome {
        // compatibility is re-evaluated at release, the hover hint is only visual
        let compatibility = match board.tactic().slot(slot_id) {
            Some(slot) => slot.compatibility(&player.position_code),
            None => return GestureOutcome::Reverted(RevertReason::OutsideSlot),
        };

        if !compatibility.is_eligible() {
            debug!("gesture: {} rejected by slot {}", player.id, slot_id);
            return GestureOutcome::Reverted(RevertReason::Incompatible);
        }

        match board.assign(slot_id, player) {
            Ok(Some(assignment)) => {
                listener.slots_changed(&assignment.changed_slots());
                GestureOutcome::Committed(assignment)
            }
            Ok(None) => GestureOutcome::Unchanged,
            Err(e) => {
                debug!("gesture: board rejected drop on {}: {}", slot_id, e);
                GestureOutcome::Reverted(RevertReason::Rejected(e))
            }
        }
    }
}
