use crate::AppData;
use crate::first_teams::first_team_routes;
use crate::matches::match_routes;
use crate::positions::position_routes;
use crate::squad::squad_routes;
use crate::tactics::tactic_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(squad_routes())
            .merge(tactic_routes())
            .merge(position_routes())
            .merge(match_routes())
            .merge(first_team_routes())
    }
}
