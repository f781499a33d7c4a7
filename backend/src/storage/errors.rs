use sqlx::error::DatabaseError;

/// Failures surfaced by the storage traits
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An insert violated a uniqueness constraint
    #[error("duplicate key")]
    DuplicateKey,
    /// A lookup matched no row
    #[error("record not found")]
    RecordNotFound,
    /// The backend did not report the id of an inserted row
    #[error("database did not return an id for the inserted row")]
    MissingInsertId,
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StorageError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateKey)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound)
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        if is_duplicate_key(&error) {
            return Self::DuplicateKey;
        }
        match error {
            sqlx::Error::RowNotFound => Self::RecordNotFound,
            other => Self::Database(other),
        }
    }
}

// SQLite extended result codes for UNIQUE and PRIMARY KEY violations
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";

/// Whether a backend error reports a uniqueness violation.
///
/// MySQL signals this with error 1062, SQLite with a constraint result code;
/// sqlx normalizes both into a unique-violation kind. The SQLite code and
/// message checks cover drivers that do not classify the error.
pub fn is_duplicate_key(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => is_duplicate_key_db(&**db_error),
        _ => false,
    }
}

fn is_duplicate_key_db(db_error: &dyn DatabaseError) -> bool {
    if db_error.is_unique_violation() {
        return true;
    }
    if let Some(code) = db_error.code() {
        if code == SQLITE_CONSTRAINT_UNIQUE || code == SQLITE_CONSTRAINT_PRIMARYKEY {
            return true;
        }
    }
    db_error.message().contains("UNIQUE constraint failed")
}
