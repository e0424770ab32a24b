mod compatibility;
mod tactic;

pub use compatibility::*;
pub use tactic::*;

use crate::lineup::{LineupError, LineupResult};
use itertools::Itertools;
use serde::Serialize;
use std::sync::Arc;

/// Registered player position code, e.g. `DD` for a right back
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionMapper {
    pub code: String,
    pub name: String,
}

/// Read-only registry of tactics, their slots and the position codes each slot accepts.
/// Built once at process start.
#[derive(Debug, Clone)]
pub struct PositionCatalog {
    positions: Vec<PositionMapper>,
    tactics: Vec<Arc<Tactic>>,
    weights: CompatibilityWeights,
}

impl PositionCatalog {
    pub fn builder() -> PositionCatalogBuilder {
        PositionCatalogBuilder::new()
    }

    pub fn tactic(&self, tactic_id: &str) -> LineupResult<&Arc<Tactic>> {
        self.tactics
            .iter()
            .find(|tactic| tactic.id == tactic_id)
            .ok_or_else(|| LineupError::UnknownTactic {
                tactic_id: tactic_id.to_string(),
            })
    }

    pub fn slots_for(&self, tactic_id: &str) -> LineupResult<&[Slot]> {
        self.tactic(tactic_id).map(|tactic| tactic.slots.as_slice())
    }

    pub fn compatibility(&self, slot: &Slot, position_code: &str) -> Compatibility {
        slot.compatibility(position_code)
    }

    pub fn tactics(&self) -> &[Arc<Tactic>] {
        &self.tactics
    }

    pub fn positions(&self) -> &[PositionMapper] {
        &self.positions
    }

    pub fn position(&self, code: &str) -> Option<&PositionMapper> {
        self.positions.iter().find(|position| position.code == code)
    }

    pub fn weights(&self) -> &CompatibilityWeights {
        &self.weights
    }
}

#[derive(Default)]
pub struct PositionCatalogBuilder {
    positions: Vec<PositionMapper>,
    tactics: Vec<Tactic>,
    weights: Option<CompatibilityWeights>,
}

impl PositionCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, code: &str, name: &str) -> Self {
        self.positions.push(PositionMapper {
            code: code.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn tactic(mut self, tactic: Tactic) -> Self {
        self.tactics.push(tactic);
        self
    }

    pub fn weights(mut self, weights: CompatibilityWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn build(self) -> LineupResult<PositionCatalog> {
        let weights = self.weights.unwrap_or_default();
        if !weights.is_valid() {
            return Err(LineupError::InvalidCatalog(format!(
                "weights must be finite and non-negative: {:?}",
                weights
            )));
        }

        if let Some(code) = self.positions.iter().map(|p| &p.code).duplicates().next() {
            return Err(LineupError::InvalidCatalog(format!(
                "position code '{}' registered twice",
                code
            )));
        }

        if let Some(id) = self.tactics.iter().map(|t| &t.id).duplicates().next() {
            return Err(LineupError::InvalidCatalog(format!(
                "tactic '{}' registered twice",
                id
            )));
        }

        for tactic in &self.tactics {
            Self::validate_tactic(tactic, &self.positions)?;
        }

        Ok(PositionCatalog {
            positions: self.positions,
            tactics: self.tactics.into_iter().map(Arc::new).collect(),
            weights,
        })
    }

    fn validate_tactic(tactic: &Tactic, positions: &[PositionMapper]) -> LineupResult<()> {
        if let Some(slot_id) = tactic.slots.iter().map(|s| &s.slot_id).duplicates().next() {
            return Err(LineupError::InvalidCatalog(format!(
                "slot '{}' appears twice in tactic '{}'",
                slot_id, tactic.id
            )));
        }

        for slot in &tactic.slots {
            if slot.accepted_codes.is_empty() {
                return Err(LineupError::InvalidCatalog(format!(
                    "slot '{}' in tactic '{}' accepts no position",
                    slot.slot_id, tactic.id
                )));
            }

            let unknown = slot
                .accepted_codes
                .iter()
                .find(|code| !positions.iter().any(|p| &p.code == *code));

            if let Some(code) = unknown {
                return Err(LineupError::InvalidCatalog(format!(
                    "slot '{}' in tactic '{}' accepts unknown position '{}'",
                    slot.slot_id, tactic.id, code
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_catalog() -> PositionCatalog {
        PositionCatalog::builder()
            .position("G", "Goalkeeper")
            .position("DD", "Right back")
            .position("DM", "Defensive midfielder")
            .tactic(Tactic::new(
                "4-4-2",
                "4-4-2",
                vec![
                    Slot::new("goal_keeper", "Goalkeeper", &["G"]),
                    Slot::new("right_back", "Right back", &["DM", "DD"]),
                ],
            ))
            .build()
            .expect("valid catalog")
    }

    #[test]
    fn test_slots_for_known_tactic() {
        let catalog = create_catalog();

        let slots = catalog.slots_for("4-4-2").unwrap();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].slot_id, "goal_keeper");
    }

    #[test]
    fn test_unknown_tactic_returns_no_slots_and_leaves_catalog_untouched() {
        let catalog = create_catalog();

        let result = catalog.slots_for("3-5-2");

        assert_eq!(
            result,
            Err(LineupError::UnknownTactic {
                tactic_id: "3-5-2".to_string()
            })
        );
        assert_eq!(catalog.tactics().len(), 1);
        assert_eq!(catalog.slots_for("4-4-2").unwrap().len(), 2);
    }

    #[test]
    fn test_compatibility_through_catalog() {
        let catalog = create_catalog();
        let slot = &catalog.slots_for("4-4-2").unwrap()[1];

        assert_eq!(catalog.compatibility(slot, "DM"), Compatibility::Exact);
        assert_eq!(catalog.compatibility(slot, "DD"), Compatibility::Acceptable);
        assert_eq!(catalog.compatibility(slot, "G"), Compatibility::Incompatible);
    }

    #[test]
    fn test_duplicate_slot_rejected_at_build() {
        let result = PositionCatalog::builder()
            .position("G", "Goalkeeper")
            .tactic(Tactic::new(
                "broken",
                "Broken",
                vec![
                    Slot::new("goal_keeper", "Goalkeeper", &["G"]),
                    Slot::new("goal_keeper", "Goalkeeper", &["G"]),
                ],
            ))
            .build();

        assert!(matches!(result, Err(LineupError::InvalidCatalog(_))));
    }

    #[test]
    fn test_duplicate_position_code_rejected_at_build() {
        let result = PositionCatalog::builder()
            .position("G", "Goalkeeper")
            .position("G", "Keeper")
            .build();

        assert_eq!(
            result.unwrap_err(),
            LineupError::InvalidCatalog("position code 'G' registered twice".to_string())
        );
    }

    #[test]
    fn test_duplicate_tactic_rejected_at_build() {
        let tactic = || {
            Tactic::new(
                "4-4-2",
                "4-4-2",
                vec![Slot::new("goal_keeper", "Goalkeeper", &["G"])],
            )
        };

        let result = PositionCatalog::builder()
            .position("G", "Goalkeeper")
            .tactic(tactic())
            .tactic(tactic())
            .build();

        assert_eq!(
            result.unwrap_err(),
            LineupError::InvalidCatalog("tactic '4-4-2' registered twice".to_string())
        );
    }

    #[test]
    fn test_unknown_position_code_rejected_at_build() {
        let result = PositionCatalog::builder()
            .position("G", "Goalkeeper")
            .tactic(Tactic::new(
                "broken",
                "Broken",
                vec![Slot::new("striker", "Striker", &["AC"])],
            ))
            .build();

        assert!(matches!(result, Err(LineupError::InvalidCatalog(_))));
    }

    #[test]
    fn test_slot_without_codes_rejected_at_build() {
        let result = PositionCatalog::builder()
            .tactic(Tactic::new(
                "broken",
                "Broken",
                vec![Slot::new("striker", "Striker", &[])],
            ))
            .build();

        assert!(matches!(result, Err(LineupError::InvalidCatalog(_))));
    }

    #[test]
    fn test_position_lookup() {
        let catalog = create_catalog();

        assert_eq!(catalog.position("DD").map(|p| p.name.as_str()), Some("Right back"));
        assert!(catalog.position("XX").is_none());
    }
}
