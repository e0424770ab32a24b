mod roster;

pub use roster::*;

use serde::Serialize;

/// Player token as delivered by the roster source. Never mutated by the lineup engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupPlayer {
    pub id: String,
    pub name: String,
    pub number: u16,
    pub position_code: String,
    pub avatar: Option<String>,
    pub enabled: bool,
}

impl LineupPlayer {
    pub fn new(id: &str, name: &str, number: u16, position_code: &str) -> Self {
        LineupPlayer {
            id: id.to_string(),
            name: name.to_string(),
            number,
            position_code: position_code.to_string(),
            avatar: None,
            enabled: true,
        }
    }

    pub fn with_avatar(mut self, avatar: &str) -> Self {
        self.avatar = Some(avatar.to_string());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
