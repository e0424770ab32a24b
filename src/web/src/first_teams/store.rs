use lineup_core::ScoredLineup;
use itertools::Itertools;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::RwLock;

/// Accepted lineups kept in memory for the lifetime of the process
pub struct FirstTeamStore {
    lineups: RwLock<Vec<ScoredLineup>>,
    sequence: AtomicU32,
}

impl Default for FirstTeamStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FirstTeamStore {
    pub fn new() -> Self {
        FirstTeamStore {
            lineups: RwLock::new(Vec::new()),
            sequence: AtomicU32::new(1),
        }
    }

    pub fn next_id(&self) -> u32 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    pub async fn insert(&self, lineup: ScoredLineup) {
        self.lineups.write().await.push(lineup);
    }

    pub async fn list(&self) -> Vec<ScoredLineup> {
        self.lineups.read().await.clone()
    }

    pub async fn get(&self, id: u32) -> Option<ScoredLineup> {
        self.lineups.read().await.iter().find(|l| l.id() == id).cloned()
    }

    pub async fn remove(&self, id: u32) -> Option<ScoredLineup> {
        let mut lineups = self.lineups.write().await;

        let position = lineups.iter().position(|l| l.id() == id)?;

        Some(lineups.remove(position))
    }

    /// Stored scores, best first; equal scores keep submission order
    pub async fn ranked_for_match(&self, match_id: u32) -> Vec<ScoredLineup> {
        self.lineups
            .read()
            .await
            .iter()
            .filter(|l| l.match_id() == match_id)
            .sorted_by(|a, b| b.score().total_cmp(&a.score()).then(a.id().cmp(&b.id())))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lineup_core::{
        LineupPlayer, LineupSnapshot, LineupSubmission, PositionCatalog, Roster, Slot,
        SnapshotEntry, Tactic,
    };

    fn create_lineup(store: &FirstTeamStore, match_id: u32, entries: &[(&str, &str)]) -> ScoredLineup {
        let catalog = PositionCatalog::builder()
            .position("G", "Goalkeeper")
            .position("DD", "Right back")
            .tactic(Tactic::new(
                "4-4-2",
                "4-4-2",
                vec![
                    Slot::new("goal_keeper", "Goalkeeper", &["G"]),
                    Slot::new("right_back", "Right back", &["DD", "G"]),
                ],
            ))
            .build()
            .unwrap();
        let roster = Roster::from_players(vec![
            LineupPlayer::new("lomba", "Lomba", 1, "G"),
            LineupPlayer::new("neto", "Neto", 2, "DD"),
            LineupPlayer::new("renan", "Renan", 12, "G"),
        ])
        .unwrap();

        LineupSubmission {
            owner: "coach".to_string(),
            match_id,
            tactic_id: "4-4-2".to_string(),
            lineup: LineupSnapshot::new(
                entries
                    .iter()
                    .map(|(slot, player)| SnapshotEntry::new(slot, player))
                    .collect(),
            ),
        }
        .accept(
            &catalog,
            &roster,
            store.next_id(),
            NaiveDate::from_ymd_opt(2012, 5, 20)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_ids_increase() {
        let store = FirstTeamStore::new();

        assert_eq!(store.next_id(), 1);
        assert_eq!(store.next_id(), 2);
    }

    #[tokio::test]
    async fn test_ranking_by_score_then_id() {
        let store = FirstTeamStore::new();
        let half = create_lineup(&store, 1, &[("right_back", "lomba")]);
        let full = create_lineup(&store, 1, &[("goal_keeper", "lomba"), ("right_back", "neto")]);
        let also_half = create_lineup(&store, 1, &[("right_back", "renan")]);
        let other_match = create_lineup(&store, 2, &[("goal_keeper", "lomba")]);

        for lineup in [half, full, also_half, other_match] {
            store.insert(lineup).await;
        }

        let ranked: Vec<u32> = store
            .ranked_for_match(1)
            .await
            .iter()
            .map(|l| l.id())
            .collect();

        assert_eq!(ranked, vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = FirstTeamStore::new();
        store
            .insert(create_lineup(&store, 1, &[("goal_keeper", "lomba")]))
            .await;

        assert!(store.remove(1).await.is_some());
        assert!(store.remove(1).await.is_none());
        assert!(store.get(1).await.is_none());
    }
}
