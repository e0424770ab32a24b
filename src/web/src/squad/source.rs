use lineup_core::RosterSource;
use std::future::Future;

/// Squad document provider behind the roster endpoints
pub struct SquadSource {
    document: Option<String>,
}

impl SquadSource {
    pub fn embedded(document: &str) -> Self {
        SquadSource {
            document: Some(document.to_string()),
        }
    }

    /// A source whose every fetch fails, as when the squad service is down
    pub fn unavailable() -> Self {
        SquadSource { document: None }
    }
}

impl RosterSource for SquadSource {
    fn fetch(&self) -> impl Future<Output = Result<String, String>> + Send {
        let result = self
            .document
            .clone()
            .ok_or_else(|| "squad service unavailable".to_string());

        async move { result }
    }
}
