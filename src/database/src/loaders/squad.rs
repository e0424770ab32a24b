const STATIC_SQUAD_JSON: &str = include_str!("../../data/squad.json");

/// Squad document kept raw: it is parsed by the roster, all or nothing
pub struct SquadEntity {
    pub json: &'static str,
}

pub struct SquadLoader;

impl SquadLoader {
    pub fn load() -> SquadEntity {
        SquadEntity {
            json: STATIC_SQUAD_JSON,
        }
    }
}
