use crate::DatabaseError;
use chrono::NaiveDate;
use serde::Deserialize;

const STATIC_CALENDAR_JSON: &str = include_str!("../../data/calendar.json");

#[derive(Deserialize)]
pub struct MatchEntity {
    pub id: u32,
    pub opponent: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tactic: Option<String>,
}

pub struct CalendarLoader;

impl CalendarLoader {
    pub fn load() -> Result<Vec<MatchEntity>, DatabaseError> {
        serde_json::from_str(STATIC_CALENDAR_JSON)
            .map_err(|e| DatabaseError::malformed("calendar.json", e))
    }
}
