//! Itinerary activity entity and repository trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A planned activity at a destination.
///
/// Maps to the `itineraries` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - destination_id: BIGINT NOT NULL REFERENCES destinations(id)
/// - activity: VARCHAR(255) NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: i64,
    pub destination_id: i64,
    pub activity: String,
}

/// User-supplied itinerary fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryFields {
    pub activity: String,
}

impl Itinerary {
    pub fn belongs_to(&self, destination_id: i64) -> bool {
        self.destination_id == destination_id
    }
}

/// Repository trait for itinerary activity data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Itinerary>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Itinerary>, AppError>;

    async fn find_by_destination(&self, destination_id: i64)
        -> Result<Vec<Itinerary>, AppError>;

    /// Returns `None`, creating nothing, when the destination does not exist.
    async fn create(
        &self,
        destination_id: i64,
        fields: &ItineraryFields,
    ) -> Result<Option<Itinerary>, AppError>;

    async fn update(
        &self,
        id: i64,
        fields: &ItineraryFields,
    ) -> Result<Option<Itinerary>, AppError>;

    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
