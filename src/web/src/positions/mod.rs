use crate::AppData;
use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use lineup_core::PositionMapper;

pub fn position_routes() -> Router<AppData> {
    Router::new().route("/api/positions", get(position_list_action))
}

pub async fn position_list_action(State(state): State<AppData>) -> Json<Vec<PositionMapper>> {
    Json(state.catalog.positions().to_vec())
}
