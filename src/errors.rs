use sea_orm::error::{DbErr, SqlErr};
use serde::Serialize;

/// Errors surfaced by the data layer.
///
/// Every write either satisfies all constraints and persists, or fails with
/// one of these synchronously. Nothing is retried internally.
#[derive(Debug, thiserror::Error, Serialize)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(
        #[from]
        #[serde(skip)]
        DbErr,
    ),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Uniqueness violation: {0}")]
    UniqueViolation(String),

    #[error("Referential error: {0}")]
    ForeignKeyViolation(String),
}

impl AppError {
    /// Classifies a database error, pulling constraint violations out into
    /// their own variants so callers can tell a duplicate title or a dangling
    /// foreign key apart from an infrastructure failure.
    pub fn from_db_err(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => AppError::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => AppError::ForeignKeyViolation(msg),
            _ => AppError::DatabaseError(err),
        }
    }

    pub fn not_found(entity: &str, id: i32) -> Self {
        AppError::NotFound(format!("{entity} with id {id} not found"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("year", validator::ValidationError::new("range"));
        let app_err: AppError = errors.into();
        assert!(matches!(app_err, AppError::ValidationError(_)));
    }

    #[test]
    fn not_found_names_the_entity() {
        let err = AppError::not_found("Section", 7);
        assert_eq!(err.to_string(), "Not found: Section with id 7 not found");
    }
}
