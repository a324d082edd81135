//! Destination Repository Implementation
//!
//! PostgreSQL implementation of the DestinationRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Destination, DestinationFields, DestinationRepository};
use crate::infrastructure::database::execute_in_transaction;
use crate::shared::error::AppError;

/// Database row representation of the destinations table.
#[derive(Debug, sqlx::FromRow)]
struct DestinationRow {
    id: i64,
    name: String,
    description: Option<String>,
    location: String,
}

impl DestinationRow {
    fn into_destination(self) -> Destination {
        Destination {
            id: self.id,
            name: self.name,
            description: self.description,
            location: self.location,
        }
    }
}

/// PostgreSQL destination repository implementation.
#[derive(Clone)]
pub struct PgDestinationRepository {
    pool: PgPool,
}

impl PgDestinationRepository {
    /// Create a new PgDestinationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DestinationRepository for PgDestinationRepository {
    async fn find_all(&self) -> Result<Vec<Destination>, AppError> {
        let rows = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT id, name, description, location
            FROM destinations
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_destination()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Destination>, AppError> {
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT id, name, description, location
            FROM destinations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_destination()))
    }

    async fn create(&self, fields: &DestinationFields) -> Result<Destination, AppError> {
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            INSERT INTO destinations (name, description, location)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, location
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.location)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_destination())
    }

    async fn update(
        &self,
        id: i64,
        fields: &DestinationFields,
    ) -> Result<Option<Destination>, AppError> {
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            UPDATE destinations
            SET name = $2,
                description = $3,
                location = $4
            WHERE id = $1
            RETURNING id, name, description, location
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.location)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_destination()))
    }

    /// Delete a destination and every row that references it.
    ///
    /// The destination row is locked first. A concurrent child insert then
    /// waits on its foreign-key check and fails once the delete commits,
    /// so no child can slip in between the two delete steps.
    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        execute_in_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                let locked = sqlx::query("SELECT id FROM destinations WHERE id = $1 FOR UPDATE")
                    .bind(id)
                    .fetch_optional(&mut **tx)
                    .await?;
                if locked.is_none() {
                    return Ok(false);
                }

                sqlx::query("DELETE FROM expenses WHERE destination_id = $1")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                sqlx::query("DELETE FROM itineraries WHERE destination_id = $1")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                let result = sqlx::query("DELETE FROM destinations WHERE id = $1")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                Ok(result.rows_affected() > 0)
            })
        })
        .await
    }
}
