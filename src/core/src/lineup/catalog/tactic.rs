use crate::lineup::catalog::Compatibility;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SlotCoordinates {
    pub x: f32,
    pub y: f32,
}

impl SlotCoordinates {
    pub fn new(x: f32, y: f32) -> Self {
        SlotCoordinates { x, y }
    }
}

/// A tactical position on the formation diagram
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub slot_id: String,
    pub label: String,
    // most compatible first
    pub accepted_codes: Vec<String>,
    pub coordinates: SlotCoordinates,
}

impl Slot {
    pub fn new(slot_id: &str, label: &str, accepted_codes: &[&str]) -> Self {
        Slot {
            slot_id: slot_id.to_string(),
            label: label.to_string(),
            accepted_codes: accepted_codes.iter().map(|code| code.to_string()).collect(),
            coordinates: SlotCoordinates::default(),
        }
    }

    pub fn with_coordinates(mut self, x: f32, y: f32) -> Self {
        self.coordinates = SlotCoordinates::new(x, y);
        self
    }

    pub fn compatibility(&self, position_code: &str) -> Compatibility {
        Compatibility::from_rank(
            self.accepted_codes
                .iter()
                .position(|code| code == position_code),
        )
    }
}

/// A named formation template, e.g. "4-4-2"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tactic {
    pub id: String,
    pub name: String,
    pub slots: Vec<Slot>,
}

impl Tactic {
    pub fn new(id: &str, name: &str, slots: Vec<Slot>) -> Self {
        Tactic {
            id: id.to_string(),
            name: name.to_string(),
            slots,
        }
    }

    pub fn slot(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.slot_id == slot_id)
    }

    pub fn slot_index(&self, slot_id: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.slot_id == slot_id)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
