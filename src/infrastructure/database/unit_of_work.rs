//! Transaction helpers
//!
//! Groups several statements into one all-or-nothing unit.

use sqlx::{PgPool, Postgres, Transaction};

use crate::shared::error::AppError;

/// Run a closure inside a transaction, committing on success.
///
/// The transaction rolls back when dropped, so an early `Err` leaves no
/// partial writes behind.
///
/// # Example
/// ```ignore
/// let deleted = execute_in_transaction(&pool, |tx| Box::pin(async move {
///     sqlx::query("DELETE FROM expenses WHERE destination_id = $1")
///         .bind(id)
///         .execute(&mut **tx)
///         .await?;
///     Ok(())
/// })).await?;
/// ```
pub async fn execute_in_transaction<F, T>(pool: &PgPool, f: F) -> Result<T, AppError>
where
    F: for<'c> FnOnce(
        &'c mut Transaction<'static, Postgres>,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<T, sqlx::Error>> + Send + 'c>,
    >,
{
    let mut tx = pool.begin().await.map_err(AppError::Database)?;

    let result = f(&mut tx).await.map_err(AppError::Database)?;

    tx.commit().await.map_err(AppError::Database)?;

    Ok(result)
}
