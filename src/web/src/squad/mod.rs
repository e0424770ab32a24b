pub mod routes;
mod source;

pub use source::*;

use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::Router;
use axum::extract::State;
use lineup_core::{Roster, RosterRecord};
use log::{info, warn};

pub fn squad_routes() -> Router<AppData> {
    routes::routes()
}

pub async fn squad_list_action(State(state): State<AppData>) -> Json<Vec<RosterRecord>> {
    Json(state.roster.read().await.to_records())
}

/// User-triggered retry; a failed fetch leaves the roster empty
pub async fn squad_reload_action(State(state): State<AppData>) -> ApiResult<Json<Vec<RosterRecord>>> {
    let fetched = Roster::fetch(state.squad.as_ref()).await;

    let mut roster = state.roster.write().await;

    match fetched {
        Ok(fetched) => {
            info!("squad reloaded: {} players", fetched.len());
            *roster = fetched;
            Ok(Json(roster.to_records()))
        }
        Err(e) => {
            warn!("squad reload failed: {}", e);
            *roster = Roster::default();
            Err(ApiError::from(e))
        }
    }
}
