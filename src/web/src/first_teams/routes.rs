use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route(
            "/api/first_teams",
            get(super::first_team_list_action).post(super::first_team_create_action),
        )
        .route(
            "/api/first_teams/{id}",
            get(super::first_team_get_action).delete(super::first_team_delete_action),
        )
        .route("/api/first_teams/{id}/lineup", get(super::first_team_lineup_action))
        .route("/api/matches/{match_id}/reports", get(super::match_report_action))
}
