use derive_more::{Display, Error};

/// Any failure opening, writing to or reading from the order store.
#[derive(Debug, Display, Error)]
pub(crate) enum StorageError {
    #[display("{source}")]
    Sqlite { source: rusqlite::Error },
    #[display("schema migration failed: {source}")]
    Migration { source: refinery::Error },
    #[display("store task aborted: {reason}")]
    Blocking { reason: String },
}

impl From<rusqlite::Error> for StorageError {
    fn from(source: rusqlite::Error) -> Self {
        StorageError::Sqlite { source }
    }
}

impl From<refinery::Error> for StorageError {
    fn from(source: refinery::Error) -> Self {
        StorageError::Migration { source }
    }
}

impl From<actix_web::error::BlockingError> for StorageError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        StorageError::Blocking { reason: e.to_string() }
    }
}
