use crate::lineup::{LineupError, LineupPlayer, LineupResult, Slot, Tactic};
use log::debug;
use std::sync::Arc;

/// In-progress slot -> player assignment for one lineup build.
///
/// Invariants held after every call:
/// - an occupied slot holds exactly one player
/// - no player occupies two slots
/// - only enabled players are placed
#[derive(Debug, Clone)]
pub struct FormationBoard {
    tactic: Arc<Tactic>,
    slots: Vec<Option<LineupPlayer>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardOccupant<'a> {
    pub slot: &'a Slot,
    pub player: &'a LineupPlayer,
}

/// Result of an atomic move/swap on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub slot_id: String,
    /// slot the player left, when it was already on the board
    pub vacated: Option<String>,
    /// previous occupant, now back in the available pool
    pub displaced: Option<LineupPlayer>,
}

impl Assignment {
    pub fn changed_slots(&self) -> Vec<String> {
        let mut slots = vec![self.slot_id.clone()];
        if let Some(vacated) = &self.vacated {
            slots.push(vacated.clone());
        }
        slots
    }
}

impl FormationBoard {
    pub fn new(tactic: Arc<Tactic>) -> Self {
        let slots = vec![None; tactic.slot_count()];
        FormationBoard { tactic, slots }
    }

    pub fn tactic(&self) -> &Tactic {
        &self.tactic
    }

    /// Puts `player` on `slot_id`, returning the displaced occupant if any.
    /// Placing a player on the slot they already hold is a no-op.
    pub fn place(&mut self, slot_id: &str, player: LineupPlayer) -> LineupResult<Option<LineupPlayer>> {
        let index = self.checked_index(slot_id, &player)?;

        match self.index_of(&player.id) {
            Some(current) if current == index => return Ok(None),
            Some(current) => {
                return Err(LineupError::PlayerAlreadyPlaced {
                    player_id: player.id,
                    slot_id: self.tactic.slots[current].slot_id.clone(),
                });
            }
            None => {}
        }

        debug!("board: {} -> {}", slot_id, player.id);

        Ok(self.slots[index].replace(player))
    }

    /// Moves `player` onto `slot_id` in a single step: their previous slot is cleared and
    /// the current occupant is displaced. Returns `None` when nothing changes.
    pub fn assign(&mut self, slot_id: &str, player: LineupPlayer) -> LineupResult<Option<Assignment>> {
        let index = self.checked_index(slot_id, &player)?;

        let current = self.index_of(&player.id);
        if current == Some(index) {
            return Ok(None);
        }

        let vacated = current.map(|i| {
            self.slots[i] = None;
            self.tactic.slots[i].slot_id.clone()
        });

        debug!("board: {} -> {} (vacated: {:?})", slot_id, player.id, vacated);

        let displaced = self.slots[index].replace(player);

        Ok(Some(Assignment {
            slot_id: slot_id.to_string(),
            vacated,
            displaced,
        }))
    }

    pub fn clear(&mut self, slot_id: &str) -> Option<LineupPlayer> {
        let index = self.tactic.slot_index(slot_id)?;
        self.slots[index].take()
    }

    pub fn occupant(&self, slot_id: &str) -> Option<&LineupPlayer> {
        let index = self.tactic.slot_index(slot_id)?;
        self.slots[index].as_ref()
    }

    pub fn slot_of(&self, player_id: &str) -> Option<&str> {
        self.index_of(player_id)
            .map(|index| self.tactic.slots[index].slot_id.as_str())
    }

    pub fn is_placed(&self, player_id: &str) -> bool {
        self.index_of(player_id).is_some()
    }

    /// Filled slots in tactic registration order
    pub fn occupants(&self) -> Vec<BoardOccupant<'_>> {
        self.tactic
            .slots
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(slot, occupant)| {
                occupant.as_ref().map(|player| BoardOccupant { slot, player })
            })
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    fn checked_index(&self, slot_id: &str, player: &LineupPlayer) -> LineupResult<usize> {
        let index = self
            .tactic
            .slot_index(slot_id)
            .ok_or_else(|| LineupError::SlotNotFound {
                slot_id: slot_id.to_string(),
                tactic_id: self.tactic.id.clone(),
            })?;

        if !player.enabled {
            return Err(LineupError::PlayerDisabled {
                player_id: player.id.clone(),
            });
        }

        Ok(index)
    }

    fn index_of(&self, player_id: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|p| p.id == player_id))
    }
}
