//! Expense Repository Implementation
//!
//! PostgreSQL implementation of the ExpenseRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Expense, ExpenseFields, ExpenseRepository};
use crate::shared::error::AppError;

/// Database row representation of the expenses table.
#[derive(Debug, sqlx::FromRow)]
struct ExpenseRow {
    id: i64,
    destination_id: i64,
    category: String,
    amount: f64,
}

impl ExpenseRow {
    fn into_expense(self) -> Expense {
        Expense {
            id: self.id,
            destination_id: self.destination_id,
            category: self.category,
            amount: self.amount,
        }
    }
}

/// PostgreSQL expense repository implementation.
#[derive(Clone)]
pub struct PgExpenseRepository {
    pool: PgPool,
}

impl PgExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseRepository for PgExpenseRepository {
    async fn find_all(&self) -> Result<Vec<Expense>, AppError> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, destination_id, category, amount
            FROM expenses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_expense()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Expense>, AppError> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, destination_id, category, amount
            FROM expenses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_expense()))
    }

    async fn find_by_destination(&self, destination_id: i64) -> Result<Vec<Expense>, AppError> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, destination_id, category, amount
            FROM expenses
            WHERE destination_id = $1
            ORDER BY id
            "#,
        )
        .bind(destination_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_expense()).collect())
    }

    async fn create(
        &self,
        destination_id: i64,
        fields: &ExpenseFields,
    ) -> Result<Option<Expense>, AppError> {
        // The existence check and the insert are a single statement
        let result = sqlx::query_as::<_, ExpenseRow>(
            r#"
            INSERT INTO expenses (destination_id, category, amount)
            SELECT $1, $2, $3
            WHERE EXISTS (SELECT 1 FROM destinations WHERE id = $1)
            RETURNING id, destination_id, category, amount
            "#,
        )
        .bind(destination_id)
        .bind(&fields.category)
        .bind(fields.amount)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row.map(|r| r.into_expense())),
            // Destination deleted between the check and the insert
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    async fn update(&self, id: i64, fields: &ExpenseFields) -> Result<Option<Expense>, AppError> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            UPDATE expenses
            SET category = $2,
                amount = $3
            WHERE id = $1
            RETURNING id, destination_id, category, amount
            "#,
        )
        .bind(id)
        .bind(&fields.category)
        .bind(fields.amount)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_expense()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
