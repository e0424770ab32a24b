use crate::DatabaseError;
use include_dir::{Dir, include_dir};
use serde::Deserialize;

static TACTICS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/data/tactics");

#[derive(Deserialize)]
pub struct TacticEntity {
    pub id: String,
    pub name: String,
    pub slots: Vec<SlotEntity>,
}

#[derive(Deserialize)]
pub struct SlotEntity {
    pub id: String,
    pub label: String,
    pub accepts: Vec<String>,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

pub struct TacticLoader;

impl TacticLoader {
    /// One file per tactic, registered in file name order
    pub fn load() -> Result<Vec<TacticEntity>, DatabaseError> {
        let mut files: Vec<_> = TACTICS_DIR
            .files()
            .filter(|file| file.path().extension().is_some_and(|ext| ext == "json"))
            .collect();

        files.sort_by(|a, b| a.path().cmp(b.path()));

        files
            .into_iter()
            .map(|file| {
                let name = file.path().display().to_string();
                let json = file
                    .contents_utf8()
                    .ok_or_else(|| DatabaseError::NotUtf8(name.clone()))?;

                serde_json::from_str(json).map_err(|e| DatabaseError::malformed(name, e))
            })
            .collect()
    }
}
