use crate::lineup::{FormationBoard, LineupError, LineupPlayer, LineupResult};
use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use std::future::Future;

/// Remote collaborator delivering the squad as a JSON document
pub trait RosterSource {
    fn fetch(&self) -> impl Future<Output = Result<String, String>> + Send;
}

/// Candidate players for one squad, in the order the source delivered them
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<LineupPlayer>,
}

impl Roster {
    pub fn from_players(players: Vec<LineupPlayer>) -> LineupResult<Self> {
        if let Some(id) = players.iter().map(|p| &p.id).duplicates().next() {
            return Err(LineupError::roster_fetch_failed(format!(
                "player id '{}' delivered twice",
                id
            )));
        }

        Ok(Roster { players })
    }

    /// Parses the squad document. Any malformed record fails the whole roster.
    pub fn from_json(body: &str) -> LineupResult<Self> {
        let records: Vec<RosterRecord> = serde_json::from_str(body)
            .map_err(|e| LineupError::roster_fetch_failed(format!("malformed roster: {}", e)))?;

        Self::from_players(records.into_iter().map(LineupPlayer::from).collect())
    }

    pub async fn fetch<S: RosterSource>(source: &S) -> LineupResult<Self> {
        let body = source.fetch().await.map_err(|reason| {
            warn!("roster source failed: {}", reason);
            LineupError::roster_fetch_failed(reason)
        })?;

        let roster = Self::from_json(&body)?;

        debug!("roster fetched: {} players", roster.len());

        Ok(roster)
    }

    pub fn get(&self, player_id: &str) -> Option<&LineupPlayer> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn players(&self) -> &[LineupPlayer] {
        &self.players
    }

    /// Enabled players not placed on the board
    pub fn available<'a>(&'a self, board: &'a FormationBoard) -> impl Iterator<Item = &'a LineupPlayer> {
        self.players
            .iter()
            .filter(move |p| p.enabled && !board.is_placed(&p.id))
    }

    pub fn to_records(&self) -> Vec<RosterRecord> {
        self.players.iter().map(RosterRecord::from).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRecord {
    pub player: RosterPlayerDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterPlayerDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_number")]
    pub number: u16,
    pub position_mapper: PositionMapperRef,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionMapperRef {
    pub code: String,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Number(u64),
    Text(String),
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Number(number) => number.to_string(),
        TextOrNumber::Text(text) => text,
    })
}

// squad documents carry shirt numbers both as integers and as strings
fn deserialize_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Number(number) => u16::try_from(number).map_err(serde::de::Error::custom),
        TextOrNumber::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl From<RosterRecord> for LineupPlayer {
    fn from(record: RosterRecord) -> Self {
        let dto = record.player;

        LineupPlayer {
            id: dto.id,
            name: dto.name,
            number: dto.number,
            position_code: dto.position_mapper.code,
            avatar: dto.avatar,
            enabled: dto.enabled,
        }
    }
}

impl From<&LineupPlayer> for RosterRecord {
    fn from(player: &LineupPlayer) -> Self {
        RosterRecord {
            player: RosterPlayerDto {
                id: player.id.clone(),
                name: player.name.clone(),
                number: player.number,
                position_mapper: PositionMapperRef {
                    code: player.position_code.clone(),
                },
                avatar: player.avatar.clone(),
                enabled: player.enabled,
            },
        }
    }
}
