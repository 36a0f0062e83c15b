use sea_orm::{DbErr, SqlErr};

/// True when the error is a Postgres unique violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let message = err.to_string().to_lowercase();
    message.contains("23505")
        || message.contains("duplicate key")
        || message.contains("unique constraint")
}

/// True when the error is a unique violation on the named index or constraint.
pub fn violates(err: &DbErr, constraint: &str) -> bool {
    is_unique_violation(err) && err.to_string().contains(constraint)
}
