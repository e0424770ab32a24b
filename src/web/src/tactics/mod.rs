pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use lineup_core::Tactic;

pub fn tactic_routes() -> Router<AppData> {
    routes::routes()
}

pub async fn tactic_list_action(State(state): State<AppData>) -> Json<Vec<Tactic>> {
    Json(
        state
            .catalog
            .tactics()
            .iter()
            .map(|tactic| tactic.as_ref().clone())
            .collect(),
    )
}

pub async fn tactic_get_action(
    State(state): State<AppData>,
    Path(tactic_id): Path<String>,
) -> ApiResult<Json<Tactic>> {
    let tactic = state.catalog.tactic(&tactic_id)?;

    Ok(Json(tactic.as_ref().clone()))
}
