//! Itinerary Repository Implementation
//!
//! PostgreSQL implementation of the ItineraryRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Itinerary, ItineraryFields, ItineraryRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ItineraryRow {
    id: i64,
    destination_id: i64,
    activity: String,
}

impl ItineraryRow {
    fn into_itinerary(self) -> Itinerary {
        Itinerary {
            id: self.id,
            destination_id: self.destination_id,
            activity: self.activity,
        }
    }
}

/// PostgreSQL itinerary repository implementation.
#[derive(Clone)]
pub struct PgItineraryRepository {
    pool: PgPool,
}

impl PgItineraryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItineraryRepository for PgItineraryRepository {
    async fn find_all(&self) -> Result<Vec<Itinerary>, AppError> {
        let rows = sqlx::query_as::<_, ItineraryRow>(
            "SELECT id, destination_id, activity FROM itineraries ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_itinerary()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Itinerary>, AppError> {
        let row = sqlx::query_as::<_, ItineraryRow>(
            "SELECT id, destination_id, activity FROM itineraries WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_itinerary()))
    }

    async fn find_by_destination(
        &self,
        destination_id: i64,
    ) -> Result<Vec<Itinerary>, AppError> {
        let rows = sqlx::query_as::<_, ItineraryRow>(
            r#"
            SELECT id, destination_id, activity
            FROM itineraries
            WHERE destination_id = $1
            ORDER BY id
            "#,
        )
        .bind(destination_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_itinerary()).collect())
    }

    async fn create(
        &self,
        destination_id: i64,
        fields: &ItineraryFields,
    ) -> Result<Option<Itinerary>, AppError> {
        let result = sqlx::query_as::<_, ItineraryRow>(
            r#"
            INSERT INTO itineraries (destination_id, activity)
            SELECT $1, $2
            WHERE EXISTS (SELECT 1 FROM destinations WHERE id = $1)
            RETURNING id, destination_id, activity
            "#,
        )
        .bind(destination_id)
        .bind(&fields.activity)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row.map(|r| r.into_itinerary())),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    async fn update(
        &self,
        id: i64,
        fields: &ItineraryFields,
    ) -> Result<Option<Itinerary>, AppError> {
        let row = sqlx::query_as::<_, ItineraryRow>(
            r#"
            UPDATE itineraries
            SET activity = $2
            WHERE id = $1
            RETURNING id, destination_id, activity
            "#,
        )
        .bind(id)
        .bind(&fields.activity)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_itinerary()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM itineraries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
