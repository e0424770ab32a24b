use crate::AppData;
use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use database::CalendarMatch;

pub fn match_routes() -> Router<AppData> {
    Router::new().route("/api/matches", get(match_list_action))
}

pub async fn match_list_action(State(state): State<AppData>) -> Json<Vec<CalendarMatch>> {
    Json(state.calendar.as_ref().clone())
}
