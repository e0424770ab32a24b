use crate::AppData;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<AppData> {
    Router::new()
        .route("/api/squad", get(super::squad_list_action))
        .route("/api/squad/reload", post(super::squad_reload_action))
}
