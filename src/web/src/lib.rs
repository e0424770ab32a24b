mod config;
mod error;
mod first_teams;
mod matches;
mod positions;
mod routes;
mod squad;
mod tactics;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use first_teams::FirstTeamStore;
pub use squad::SquadSource;

use crate::routes::ServerRoutes;
use axum::Router;
use axum::response::IntoResponse;
use lineup_core::{PositionCatalog, Roster};
use database::CalendarMatch;
use log::{error, info};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct CoachManagerServer {
    data: AppData,
    config: ServerConfig,
}

impl CoachManagerServer {
    pub fn new(data: AppData, config: ServerConfig) -> Self {
        CoachManagerServer { data, config }
    }

    pub fn router(data: AppData) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("handler panicked".to_string()).into_response()
                    })),
            )
            .with_state(data)
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let app = Self::router(self.data.clone());

        let addr = self.config.socket_addr();

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
            e
        })?;

        info!("listen at: http://{}", addr);

        axum::serve(listener, app).await
    }
}

pub struct AppData {
    pub catalog: Arc<PositionCatalog>,
    pub calendar: Arc<Vec<CalendarMatch>>,
    pub roster: Arc<RwLock<Roster>>,
    pub squad: Arc<SquadSource>,
    pub first_teams: Arc<FirstTeamStore>,
}

impl AppData {
    pub fn new(
        catalog: PositionCatalog,
        calendar: Vec<CalendarMatch>,
        roster: Roster,
        squad: SquadSource,
    ) -> Self {
        AppData {
            catalog: Arc::new(catalog),
            calendar: Arc::new(calendar),
            roster: Arc::new(RwLock::new(roster)),
            squad: Arc::new(squad),
            first_teams: Arc::new(FirstTeamStore::new()),
        }
    }

    pub fn calendar_match(&self, match_id: u32) -> ApiResult<&CalendarMatch> {
        self.calendar
            .iter()
            .find(|m| m.id == match_id)
            .ok_or_else(|| ApiError::NotFound(format!("Match {} not found", match_id)))
    }
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            catalog: Arc::clone(&self.catalog),
            calendar: Arc::clone(&self.calendar),
            roster: Arc::clone(&self.roster),
            squad: Arc::clone(&self.squad),
            first_teams: Arc::clone(&self.first_teams),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use chrono::NaiveDate;
    use lineup_core::{Slot, Tactic};
    use serde_json::Value;
    use tower::util::ServiceExt;

    pub const SQUAD_JSON: &str = r#"[
        { "player": { "id": "lomba", "name": "Lomba", "number": "1", "position_mapper": { "code": "G" }, "enabled": true } },
        { "player": { "id": "neto", "name": "Neto", "number": 2, "position_mapper": { "code": "DD" } } },
        { "player": { "id": "souza", "name": "Souza", "number": "9", "avatar": "souza.png", "position_mapper": { "code": "AC" } } },
        { "player": { "id": "injured", "name": "Injured", "number": "5", "position_mapper": { "code": "AC" }, "enabled": false } }
    ]"#;

    pub fn create_data(squad: SquadSource) -> AppData {
        let catalog = PositionCatalog::builder()
            .position("G", "Goalkeeper")
            .position("DD", "Right back")
            .position("AC", "Centre forward")
            .tactic(Tactic::new(
                "4-4-2",
                "4-4-2",
                vec![
                    Slot::new("goal_keeper", "Goalkeeper", &["G"]),
                    Slot::new("right_back", "Right back", &["DD"]),
                    Slot::new("striker", "Striker", &["AC", "DD"]),
                ],
            ))
            .build()
            .unwrap();

        let calendar = vec![CalendarMatch {
            id: 1,
            opponent: "Vitória".to_string(),
            date: NaiveDate::from_ymd_opt(2012, 5, 20).unwrap(),
            tactic_id: "4-4-2".to_string(),
        }];

        AppData::new(
            catalog,
            calendar,
            Roster::from_json(SQUAD_JSON).unwrap(),
            squad,
        )
    }

    pub async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }
}
