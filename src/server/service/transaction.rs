use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::error::AppError;

/// Commits `txn` when `result` is Ok and rolls it back otherwise.
///
/// The original error is returned even if the rollback itself fails.
pub async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// Opens a transaction on the pool.
///
/// Pair with [`finish`] so the outcome of the work decides commit or rollback.
pub async fn begin(db: &DatabaseConnection) -> Result<DatabaseTransaction, AppError> {
    Ok(db.begin().await?)
}
