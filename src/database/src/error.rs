use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("malformed data file {file}: {source}")]
    Malformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("data file {0} is not valid UTF-8")]
    NotUtf8(String),
}

impl DatabaseError {
    pub fn malformed(file: impl Into<String>, source: serde_json::Error) -> Self {
        DatabaseError::Malformed {
            file: file.into(),
            source,
        }
    }
}
