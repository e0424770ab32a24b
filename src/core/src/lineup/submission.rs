use crate::lineup::{LineupResult, LineupScorer, LineupSnapshot, PositionCatalog, Roster};
use chrono::NaiveDateTime;
use log::info;
use serde::{Deserialize, Serialize};

/// Lineup handed over for persistence, not yet validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSubmission {
    pub owner: String,
    pub match_id: u32,
    pub tactic_id: String,
    pub lineup: LineupSnapshot,
}

impl LineupSubmission {
    /// Validates the lineup against the tactic and roster, then scores it once.
    pub fn accept(
        self,
        catalog: &PositionCatalog,
        roster: &Roster,
        id: u32,
        created_at: NaiveDateTime,
    ) -> LineupResult<ScoredLineup> {
        let board = self.lineup.decode(catalog, &self.tactic_id, roster)?;

        // stored in canonical slot order whatever order the client sent
        let lineup = LineupSnapshot::encode(&board);
        let score = LineupScorer::score(catalog, &lineup, &self.tactic_id, roster);

        info!(
            "lineup {} accepted for match {} ({}): {} players, score {:.1}",
            id,
            self.match_id,
            self.tactic_id,
            lineup.len(),
            score
        );

        Ok(ScoredLineup {
            id,
            owner: self.owner,
            match_id: self.match_id,
            tactic_id: self.tactic_id,
            lineup,
            score,
            created_at,
        })
    }
}

/// Accepted lineup with its score, immutable once created
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLineup {
    id: u32,
    owner: String,
    match_id: u32,
    tactic_id: String,
    lineup: LineupSnapshot,
    score: f32,
    created_at: NaiveDateTime,
}

impl ScoredLineup {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn match_id(&self) -> u32 {
        self.match_id
    }

    pub fn tactic_id(&self) -> &str {
        &self.tactic_id
    }

    pub fn lineup(&self) -> &LineupSnapshot {
        &self.lineup
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}
