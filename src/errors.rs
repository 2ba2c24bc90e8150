use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors raised while configuring, connecting to or writing the company database.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid settings or seed file
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A required credential variable is absent or blank
    #[error("Missing credential: environment variable {name} is not set")]
    MissingCredential { name: String },

    /// A unique or primary key constraint rejected a row
    #[error("Unique constraint violated: {detail}")]
    UniqueViolation { detail: String },

    /// A row referenced a parent that does not exist
    #[error("Foreign key constraint violated: {detail}")]
    ForeignKeyViolation { detail: String },

    /// Any other database failure, connection errors included
    #[error("Database error: {0}")]
    Database(DbErr),

    /// No department with this id
    #[error("Department {id} not found")]
    DepartmentNotFound { id: i32 },

    /// No manager with this id
    #[error("Manager {id} not found")]
    ManagerNotFound { id: i32 },
}

impl Error {
    /// True for uniqueness and foreign-key violations reported by the database.
    #[must_use]
    pub const fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::UniqueViolation { .. } | Self::ForeignKeyViolation { .. }
        )
    }
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        match value.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::UniqueViolation { detail },
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::ForeignKeyViolation { detail }
            }
            _ => Self::Database(value),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
