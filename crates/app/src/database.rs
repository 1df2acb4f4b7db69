//! Database connection management

use sqlx::{
    PgPool, Row,
    error::{DatabaseError, ErrorKind},
    migrate::MigrateError,
    postgres::PgRow,
};

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error when a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Read a non-negative `BIGINT` money column as minor units.
pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Convert minor units into a bindable `BIGINT`.
///
/// Amounts past `i64::MAX` fail as [`sqlx::Error::Encode`], which [`classify`] treats as invalid data.
pub(crate) fn amount_to_i64(col: &str, amount: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(amount)
        .map_err(|_| sqlx::Error::Encode(format!("{col} amount {amount} is out of range").into()))
}

/// Storage failure categories shared by every service error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StoreErrorKind {
    NotFound,
    AlreadyExists,
    InvalidReference,
    MissingRequiredData,
    InvalidData,
    Other,
}

pub(crate) fn classify(error: &sqlx::Error) -> StoreErrorKind {
    match error {
        sqlx::Error::RowNotFound => return StoreErrorKind::NotFound,
        sqlx::Error::Encode(_) => return StoreErrorKind::InvalidData,
        _ => {}
    }

    match error.as_database_error().map(DatabaseError::kind) {
        Some(ErrorKind::UniqueViolation) => StoreErrorKind::AlreadyExists,
        Some(ErrorKind::ForeignKeyViolation) => StoreErrorKind::InvalidReference,
        Some(ErrorKind::NotNullViolation) => StoreErrorKind::MissingRequiredData,
        Some(ErrorKind::CheckViolation) => StoreErrorKind::InvalidData,
        Some(ErrorKind::Other | _) | None => StoreErrorKind::Other,
    }
}
