use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/api/tactics", get(super::tactic_list_action))
        .route("/api/tactics/{tactic_id}", get(super::tactic_get_action))
}
