pub mod routes;
mod store;

pub use store::*;

use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{Local, NaiveDateTime};
use lineup_core::{LineupPlayer, LineupSnapshot, LineupSubmission, ScoredLineup};
use log::{info, warn};
use serde::{Deserialize, Serialize};

pub fn first_team_routes() -> Router<AppData> {
    routes::routes()
}

#[derive(Deserialize)]
pub struct FirstTeamCreateRequest {
    pub match_id: u32,
    pub owner: String,
    pub lineup: LineupSnapshot,
}

#[derive(Serialize)]
pub struct FirstTeamDetailsResponse {
    #[serde(flatten)]
    pub first_team: ScoredLineup,
    pub slots: Vec<FirstTeamSlotDto>,
}

#[derive(Serialize)]
pub struct FirstTeamSlotDto {
    pub slot_id: String,
    pub label: String,
    pub player: Option<LineupPlayer>,
}

#[derive(Serialize)]
pub struct MatchReportEntry {
    pub rank: usize,
    pub id: u32,
    pub owner: String,
    pub score: f32,
    pub created_at: NaiveDateTime,
}

pub async fn first_team_create_action(
    State(state): State<AppData>,
    Json(request): Json<FirstTeamCreateRequest>,
) -> ApiResult<(StatusCode, Json<ScoredLineup>)> {
    if request.owner.trim().is_empty() {
        return Err(ApiError::BadRequest("owner is required".to_string()));
    }

    let calendar_match = state.calendar_match(request.match_id)?;

    let submission = LineupSubmission {
        owner: request.owner,
        match_id: request.match_id,
        tactic_id: calendar_match.tactic_id.clone(),
        lineup: request.lineup,
    };

    let roster = state.roster.read().await;

    let first_team = submission
        .accept(
            &state.catalog,
            &roster,
            state.first_teams.next_id(),
            Local::now().naive_local(),
        )
        .map_err(|e| {
            warn!("lineup rejected for match {}: {}", request.match_id, e);
            ApiError::from(e)
        })?;

    state.first_teams.insert(first_team.clone()).await;

    Ok((StatusCode::CREATED, Json(first_team)))
}

pub async fn first_team_list_action(State(state): State<AppData>) -> Json<Vec<ScoredLineup>> {
    Json(state.first_teams.list().await)
}

pub async fn first_team_get_action(
    State(state): State<AppData>,
    Path(id): Path<u32>,
) -> ApiResult<Json<FirstTeamDetailsResponse>> {
    let first_team = find_first_team(&state, id).await?;

    let tactic = state.catalog.tactic(first_team.tactic_id())?;
    let roster = state.roster.read().await;

    let slots = tactic
        .slots
        .iter()
        .map(|slot| FirstTeamSlotDto {
            slot_id: slot.slot_id.clone(),
            label: slot.label.clone(),
            player: first_team
                .lineup()
                .player_for(&slot.slot_id)
                .and_then(|player_id| roster.get(player_id))
                .cloned(),
        })
        .collect();

    Ok(Json(FirstTeamDetailsResponse { first_team, slots }))
}

/// Wire snapshot for resuming an edit
pub async fn first_team_lineup_action(
    State(state): State<AppData>,
    Path(id): Path<u32>,
) -> ApiResult<Json<LineupSnapshot>> {
    let first_team = find_first_team(&state, id).await?;

    Ok(Json(first_team.lineup().clone()))
}

pub async fn first_team_delete_action(
    State(state): State<AppData>,
    Path(id): Path<u32>,
) -> ApiResult<StatusCode> {
    state
        .first_teams
        .remove(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("First team {} not found", id)))?;

    info!("first team {} deleted", id);

    Ok(StatusCode::NO_CONTENT)
}

pub async fn match_report_action(
    State(state): State<AppData>,
    Path(match_id): Path<u32>,
) -> ApiResult<Json<Vec<MatchReportEntry>>> {
    state.calendar_match(match_id)?;

    let report = state
        .first_teams
        .ranked_for_match(match_id)
        .await
        .into_iter()
        .enumerate()
        .map(|(index, first_team)| MatchReportEntry {
            rank: index + 1,
            id: first_team.id(),
            owner: first_team.owner().to_string(),
            score: first_team.score(),
            created_at: first_team.created_at(),
        })
        .collect();

    Ok(Json(report))
}

async fn find_first_team(state: &AppData, id: u32) -> ApiResult<ScoredLineup> {
    state
        .first_teams
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("First team {} not found", id)))
}
