use crate::DatabaseError;
use serde::Deserialize;

const STATIC_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

#[derive(Deserialize)]
pub struct CatalogEntity {
    #[serde(default)]
    pub weights: Option<WeightsEntity>,
    pub positions: Vec<PositionEntity>,
}

#[derive(Deserialize)]
pub struct WeightsEntity {
    pub exact: f32,
    pub acceptable: f32,
}

#[derive(Deserialize)]
pub struct PositionEntity {
    pub code: String,
    pub name: String,
}

pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load() -> Result<CatalogEntity, DatabaseError> {
        Self::parse(STATIC_CATALOG_JSON)
    }

    fn parse(json: &str) -> Result<CatalogEntity, DatabaseError> {
        serde_json::from_str(json).map_err(|e| DatabaseError::malformed("catalog.json", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_are_optional() {
        let catalog = CatalogLoader::parse(r#"{ "positions": [ { "code": "G", "name": "Goalkeeper" } ] }"#)
            .unwrap();

        assert!(catalog.weights.is_none());
        assert_eq!(catalog.positions[0].code, "G");
    }

    #[test]
    fn test_malformed_catalog_names_file() {
        let error = CatalogLoader::parse("{ \"positions\": 3 }").err().unwrap();

        assert!(error.to_string().starts_with("malformed data file catalog.json"));
    }
}
