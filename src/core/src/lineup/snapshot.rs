use crate::lineup::{FormationBoard, LineupError, LineupResult, PositionCatalog, Roster};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry {
    pub slot_id: String,
    pub player_id: String,
}

impl SnapshotEntry {
    pub fn new(slot_id: &str, player_id: &str) -> Self {
        SnapshotEntry {
            slot_id: slot_id.to_string(),
            player_id: player_id.to_string(),
        }
    }
}

/// Serialized board: occupied slots only, in tactic slot order.
/// Wire shape is a bare array `[{ "slotId": .., "playerId": .. }]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineupSnapshot {
    entries: Vec<SnapshotEntry>,
}

impl LineupSnapshot {
    pub fn new(entries: Vec<SnapshotEntry>) -> Self {
        LineupSnapshot { entries }
    }

    pub fn encode(board: &FormationBoard) -> Self {
        LineupSnapshot {
            entries: board
                .occupants()
                .iter()
                .map(|occupant| SnapshotEntry::new(&occupant.slot.slot_id, &occupant.player.id))
                .collect(),
        }
    }

    /// Rebuilds a board for `tactic_id`. Players are resolved through `roster`, never looked up
    /// elsewhere. Stops at the first offending entry and returns no board.
    pub fn decode(
        &self,
        catalog: &PositionCatalog,
        tactic_id: &str,
        roster: &Roster,
    ) -> LineupResult<FormationBoard> {
        let tactic = catalog.tactic(tactic_id)?;

        let mut board = FormationBoard::new(Arc::clone(tactic));
        let mut seen_slots = HashSet::new();
        let mut seen_players = HashSet::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if tactic.slot(&entry.slot_id).is_none() {
                return Err(LineupError::UnknownSlot {
                    index,
                    slot_id: entry.slot_id.clone(),
                    tactic_id: tactic_id.to_string(),
                });
            }

            if !seen_slots.insert(entry.slot_id.as_str()) {
                return Err(LineupError::DuplicateSlot {
                    index,
                    slot_id: entry.slot_id.clone(),
                });
            }

            if !seen_players.insert(entry.player_id.as_str()) {
                return Err(LineupError::DuplicatePlayer {
                    index,
                    player_id: entry.player_id.clone(),
                });
            }

            let player = roster
                .get(&entry.player_id)
                .ok_or_else(|| LineupError::UnresolvedPlayer {
                    index,
                    player_id: entry.player_id.clone(),
                })?;

            board.place(&entry.slot_id, player.clone())?;
        }

        debug!(
            "snapshot decoded: {} of {} slots filled for {}",
            board.occupied_count(),
            tactic.slot_count(),
            tactic_id
        );

        Ok(board)
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    pub fn player_for(&self, slot_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.slot_id == slot_id)
            .map(|entry| entry.player_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<SnapshotEntry> for LineupSnapshot {
    fn from_iter<I: IntoIterator<Item = SnapshotEntry>>(iter: I) -> Self {
        LineupSnapshot::new(iter.into_iter().collect())
    }
}
