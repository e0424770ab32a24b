use crate::{DatabaseEntity, DatabaseGenerator};
use chrono::NaiveDate;
use lineup_core::PositionCatalog;
use log::warn;
use serde::Serialize;

/// Fixture a lineup can be submitted for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarMatch {
    pub id: u32,
    pub opponent: String,
    pub date: NaiveDate,
    pub tactic_id: String,
}

impl DatabaseGenerator {
    /// Matches with a tactic the catalog knows, in calendar order
    pub fn calendar(data: &DatabaseEntity, catalog: &PositionCatalog) -> Vec<CalendarMatch> {
        data.calendar
            .iter()
            .filter_map(|entity| {
                let Some(tactic_id) = &entity.tactic else {
                    warn!("match {} against {} has no tactic, skipped", entity.id, entity.opponent);
                    return None;
                };

                if let Err(e) = catalog.tactic(tactic_id) {
                    warn!("match {} skipped: {}", entity.id, e);
                    return None;
                }

                Some(CalendarMatch {
                    id: entity.id,
                    opponent: entity.opponent.clone(),
                    date: entity.date,
                    tactic_id: tactic_id.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;

    #[test]
    fn test_matches_without_known_tactic_are_skipped() {
        let database = DatabaseLoader::load().unwrap();
        let catalog = DatabaseGenerator::catalog(&database).unwrap();

        let calendar = DatabaseGenerator::calendar(&database, &catalog);

        assert_eq!(calendar.len(), database.calendar.len() - 1);
        assert!(calendar.iter().all(|m| catalog.tactic(&m.tactic_id).is_ok()));
    }
}
