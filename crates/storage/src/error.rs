use thiserror::Error;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Classifies the error returned by an INSERT or UPDATE so that constraint
    /// failures surface as client errors instead of opaque database errors.
    pub fn from_write(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_error) = &error {
            let constraint = db_error.constraint().unwrap_or("unknown constraint");
            match db_error.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    return Self::ConstraintViolation(format!(
                        "a row with this value already exists ({constraint})"
                    ));
                }
                Some(CHECK_VIOLATION) => {
                    return Self::ConstraintViolation(format!(
                        "value rejected by {constraint}"
                    ));
                }
                Some(NUMERIC_VALUE_OUT_OF_RANGE) => {
                    return Self::ConstraintViolation("numeric value out of range".to_string());
                }
                Some(FOREIGN_KEY_VIOLATION) => {
                    return Self::InvalidReference(format!(
                        "referenced object does not exist ({constraint})"
                    ));
                }
                _ => {}
            }
        }

        Self::Database(error)
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::ConstraintViolation(_) | Self::InvalidReference(_)
        )
    }
}
