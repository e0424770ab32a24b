use crate::lineup::{
    AssignmentStateMachine, FormationBoard, GestureEvent, GestureOutcome, GestureState,
    LineupPlayer, LineupResult, LineupScorer, LineupSnapshot, LineupSubmission, NoopListener,
    PositionCatalog, Roster, RosterSource, SlotChangeListener,
};
use log::{info, warn};
use std::sync::Arc;

/// Pointer input as delivered by whatever renders the formation diagram
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Down(String),
    Move(Option<String>),
    Up,
    Cancel,
}

/// One lineup build: owns its board exclusively from start until submit or drop
pub struct BuildSession {
    catalog: Arc<PositionCatalog>,
    board: FormationBoard,
    machine: AssignmentStateMachine,
    roster: Roster,
    listener: Box<dyn SlotChangeListener + Send>,
}

impl BuildSession {
    pub fn new(catalog: Arc<PositionCatalog>, tactic_id: &str) -> LineupResult<Self> {
        let tactic = Arc::clone(catalog.tactic(tactic_id)?);

        Ok(BuildSession {
            board: FormationBoard::new(tactic),
            catalog,
            machine: AssignmentStateMachine::new(),
            roster: Roster::default(),
            listener: Box::new(NoopListener),
        })
    }

    /// Edit of a saved lineup
    pub fn resume(
        catalog: Arc<PositionCatalog>,
        tactic_id: &str,
        snapshot: &LineupSnapshot,
        roster: Roster,
    ) -> LineupResult<Self> {
        let board = snapshot.decode(&catalog, tactic_id, &roster)?;

        Ok(BuildSession {
            board,
            catalog,
            machine: AssignmentStateMachine::new(),
            roster,
            listener: Box::new(NoopListener),
        })
    }

    pub fn with_listener<L: SlotChangeListener + Send + 'static>(mut self, listener: L) -> Self {
        self.listener = Box::new(listener);
        self
    }

    /// All or nothing: on failure the roster is left empty and the error can be retried
    pub async fn load_roster<S: RosterSource>(&mut self, source: &S) -> LineupResult<()> {
        match Roster::fetch(source).await {
            Ok(roster) => {
                info!("roster loaded: {} players", roster.len());
                self.roster = roster;
                Ok(())
            }
            Err(e) => {
                warn!("roster load failed: {}", e);
                self.roster = Roster::default();
                Err(e)
            }
        }
    }

    pub fn pointer(&mut self, event: PointerEvent) -> GestureOutcome {
        let event = match event {
            PointerEvent::Down(player_id) => match self.roster.get(&player_id) {
                Some(player) => GestureEvent::PickUp(player.clone()),
                None => return GestureOutcome::Ignored,
            },
            PointerEvent::Move(slot_id) => GestureEvent::Hover(slot_id),
            PointerEvent::Up => GestureEvent::Release,
            PointerEvent::Cancel => GestureEvent::Cancel,
        };

        self.machine
            .handle(event, &mut self.board, self.listener.as_mut())
    }

    pub fn board(&self) -> &FormationBoard {
        &self.board
    }

    pub fn gesture(&self) -> &GestureState {
        self.machine.state()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn available_players(&self) -> Vec<&LineupPlayer> {
        self.roster.available(&self.board).collect()
    }

    pub fn snapshot(&self) -> LineupSnapshot {
        LineupSnapshot::encode(&self.board)
    }

    pub fn live_score(&self) -> f32 {
        LineupScorer::score_board(&self.board, self.catalog.weights())
    }

    /// Ends the session, handing the encoded board over for persistence
    pub fn submit(self, owner: &str, match_id: u32) -> LineupSubmission {
        LineupSubmission {
            owner: owner.to_string(),
            match_id,
            tactic_id: self.board.tactic().id.clone(),
            lineup: self.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::{LineupError, RevertReason, Slot, SnapshotEntry, Tactic};
    use std::future::Future;
    use std::sync::Mutex;

    const SQUAD_JSON: &str = r#"[
        { "player": { "id": "playerId1", "name": "Lomba", "number": "1", "position_mapper": { "code": "G" }, "enabled": true } },
        { "player": { "id": "playerId2", "name": "Neto", "number": "2", "position_mapper": { "code": "DD" }, "enabled": true } },
        { "player": { "id": "playerId3", "name": "Fahel", "number": "7", "avatar": "avatar3", "position_mapper": { "code": "MDC" }, "enabled": true } },
        { "player": { "id": "disabled", "name": "Disabled", "number": "0", "avatar": "none", "position_mapper": { "code": "G" }, "enabled": false } }
    ]"#;

    struct StaticSource(Result<String, String>);

    impl RosterSource for StaticSource {
        fn fetch(&self) -> impl Future<Output = Result<String, String>> + Send {
            let result = self.0.clone();
            async move { result }
        }
    }

    fn create_catalog() -> Arc<PositionCatalog> {
        Arc::new(
            PositionCatalog::builder()
                .position("G", "Goalkeeper")
                .position("DD", "Right back")
                .position("MDC", "Defensive midfielder")
                .tactic(Tactic::new(
                    "4-4-2",
                    "4-4-2",
                    vec![
                        Slot::new("goal_keeper", "Goalkeeper", &["G"]),
                        Slot::new("right_back", "Right back", &["DD"]),
                        Slot::new("defensive_midfielder", "Defensive midfielder", &["MDC", "DD"]),
                    ],
                ))
                .build()
                .unwrap(),
        )
    }

    fn drag(session: &mut BuildSession, player_id: &str, slot_id: &str) -> GestureOutcome {
        session.pointer(PointerEvent::Down(player_id.to_string()));
        session.pointer(PointerEvent::Move(Some(slot_id.to_string())));
        session.pointer(PointerEvent::Up)
    }

    #[test]
    fn test_unknown_tactic_fails_session() {
        let result = BuildSession::new(create_catalog(), "3-5-2");
        assert!(matches!(result, Err(LineupError::UnknownTactic { .. })));
    }

    #[test]
    fn test_tokens_inert_before_roster_loads() {
        let mut session = BuildSession::new(create_catalog(), "4-4-2").unwrap();

        let outcome = session.pointer(PointerEvent::Down("playerId1".to_string()));

        assert_eq!(outcome, GestureOutcome::Ignored);
        assert!(session.gesture().is_idle());
    }

    #[tokio::test]
    async fn test_full_build_and_submit() {
        let notified = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&notified);
        let mut session = BuildSession::new(create_catalog(), "4-4-2")
            .unwrap()
            .with_listener(move |slots: &[String]| sink.lock().unwrap().extend_from_slice(slots));

        session
            .load_roster(&StaticSource(Ok(SQUAD_JSON.to_string())))
            .await
            .unwrap();

        assert!(drag(&mut session, "playerId1", "goal_keeper").is_committed());
        assert!(drag(&mut session, "playerId2", "defensive_midfielder").is_committed());
        assert_eq!(
            drag(&mut session, "disabled", "goal_keeper"),
            GestureOutcome::Ignored
        );
        assert_eq!(session.live_score(), 1.5);
        assert_eq!(session.available_players().len(), 1);
        assert_eq!(
            *notified.lock().unwrap(),
            vec!["goal_keeper".to_string(), "defensive_midfielder".to_string()]
        );

        let submission = session.submit("coach", 3);

        assert_eq!(submission.tactic_id, "4-4-2");
        assert_eq!(
            submission.lineup.entries(),
            &[
                SnapshotEntry::new("goal_keeper", "playerId1"),
                SnapshotEntry::new("defensive_midfielder", "playerId2")
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_roster_load_leaves_roster_empty() {
        let mut session = BuildSession::new(create_catalog(), "4-4-2").unwrap();
        session
            .load_roster(&StaticSource(Ok(SQUAD_JSON.to_string())))
            .await
            .unwrap();

        let result = session
            .load_roster(&StaticSource(Err("503 Service Unavailable".to_string())))
            .await;

        assert!(result.unwrap_err().is_retryable());
        assert!(session.roster().is_empty());
    }

    #[test]
    fn test_resume_and_cancel_gesture() {
        let roster = Roster::from_json(SQUAD_JSON).unwrap();
        let snapshot = LineupSnapshot::new(vec![SnapshotEntry::new("right_back", "playerId2")]);

        let mut session =
            BuildSession::resume(create_catalog(), "4-4-2", &snapshot, roster).unwrap();

        session.pointer(PointerEvent::Down("playerId2".to_string()));
        session.pointer(PointerEvent::Move(Some("defensive_midfielder".to_string())));
        let outcome = session.pointer(PointerEvent::Cancel);

        assert_eq!(outcome, GestureOutcome::Reverted(RevertReason::Cancelled));
        assert_eq!(session.snapshot(), snapshot);
    }
}
