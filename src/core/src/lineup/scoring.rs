use crate::lineup::{
    Compatibility, CompatibilityWeights, FormationBoard, LineupSnapshot, PositionCatalog, Roster,
};
use log::warn;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotScore {
    pub slot_id: String,
    pub player_id: Option<String>,
    pub compatibility: Option<Compatibility>,
    pub value: f32,
}

/// Lineup quality against a tactic: the sum of per-slot compatibility weights.
/// Not normalised, so scores only compare between lineups on the same tactic.
pub struct LineupScorer;

impl LineupScorer {
    /// Total over any structurally valid snapshot: unknown tactic, unknown slots,
    /// unresolved players and incompatible placements all contribute 0.
    pub fn score(
        catalog: &PositionCatalog,
        snapshot: &LineupSnapshot,
        tactic_id: &str,
        roster: &Roster,
    ) -> f32 {
        Self::breakdown(catalog, snapshot, tactic_id, roster)
            .iter()
            .map(|slot| slot.value)
            .sum()
    }

    pub fn breakdown(
        catalog: &PositionCatalog,
        snapshot: &LineupSnapshot,
        tactic_id: &str,
        roster: &Roster,
    ) -> Vec<SlotScore> {
        let slots = match catalog.slots_for(tactic_id) {
            Ok(slots) => slots,
            Err(e) => {
                warn!("scoring against {}: {}", tactic_id, e);
                return Vec::new();
            }
        };

        let weights = catalog.weights();

        slots
            .iter()
            .map(|slot| {
                let player = snapshot
                    .player_for(&slot.slot_id)
                    .and_then(|player_id| roster.get(player_id));

                match player {
                    Some(player) => {
                        let compatibility = catalog.compatibility(slot, &player.position_code);
                        SlotScore {
                            slot_id: slot.slot_id.clone(),
                            player_id: Some(player.id.clone()),
                            compatibility: Some(compatibility),
                            value: weights.weight(compatibility),
                        }
                    }
                    None => SlotScore {
                        slot_id: slot.slot_id.clone(),
                        player_id: None,
                        compatibility: None,
                        value: 0.0,
                    },
                }
            })
            .collect()
    }

    /// Live score of a board being built
    pub fn score_board(board: &FormationBoard, weights: &CompatibilityWeights) -> f32 {
        board
            .occupants()
            .iter()
            .map(|o| weights.weight(o.slot.compatibility(&o.player.position_code)))
            .sum()
    }
}
