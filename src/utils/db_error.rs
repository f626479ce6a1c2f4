//! Classification of sqlx errors at the repository boundary.
//!
//! Only one store failure is recognized specially: a unique violation on the
//! short code constraint, which the creation protocol treats as a retryable
//! collision. Everything else propagates as an internal error. The check is
//! scoped to the named constraint so an unrelated uniqueness violation is
//! never masked as a collision.

use crate::error::AppError;

/// Name of the unique constraint on `short_links.code`, as declared in the
/// migrations.
const CODE_CONSTRAINT: &str = "short_links_code_key";

/// Returns true when the error is a unique violation on the code constraint.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(CODE_CONSTRAINT)
}

/// Maps an unrecognized sqlx error to an internal application error.
///
/// The driver detail goes to the log; the caller only ever sees a generic
/// message.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    tracing::error!(error = %e, "database error");
    AppError::internal("Database error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_collision() {
        assert!(!is_unique_violation_on_code(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn test_map_sqlx_error_is_internal() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
