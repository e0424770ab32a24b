mod error;
mod generators;
mod loaders;

pub use error::*;
pub use generators::*;
pub use loaders::*;

pub struct DatabaseEntity {
    pub catalog: CatalogEntity,
    pub tactics: Vec<TacticEntity>,
    pub squad: SquadEntity,
    pub calendar: Vec<MatchEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, DatabaseError> {
        Ok(DatabaseEntity {
            catalog: CatalogLoader::load()?,
            tactics: TacticLoader::load()?,
            squad: SquadLoader::load(),
            calendar: CalendarLoader::load()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_database_loads() {
        let database = DatabaseLoader::load().unwrap();

        assert_eq!(database.catalog.positions.len(), 12);
        assert_eq!(database.tactics.len(), 4);
        assert!(!database.calendar.is_empty());
    }
}
