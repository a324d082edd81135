//! Itinerary Service
//!
//! Same contract as the expense service, for planned activities.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{Itinerary, ItineraryFields, ItineraryRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Itinerary service trait
#[async_trait]
pub trait ItineraryService: Send + Sync {
    async fn list_itineraries(&self) -> Result<Vec<Itinerary>, ItineraryError>;

    /// Activities of one destination; an empty result is reported as not found
    async fn list_for_destination(
        &self,
        destination_id: i64,
    ) -> Result<Vec<Itinerary>, ItineraryError>;

    async fn get_activity(
        &self,
        destination_id: i64,
        itinerary_id: i64,
    ) -> Result<Itinerary, ItineraryError>;

    async fn add_activity(
        &self,
        destination_id: i64,
        fields: ItineraryFields,
    ) -> Result<Itinerary, ItineraryError>;

    async fn update_activity(
        &self,
        destination_id: i64,
        itinerary_id: i64,
        fields: ItineraryFields,
    ) -> Result<Itinerary, ItineraryError>;

    async fn delete_activity(
        &self,
        destination_id: i64,
        itinerary_id: i64,
    ) -> Result<(), ItineraryError>;
}

/// Itinerary service errors
#[derive(Debug, thiserror::Error)]
pub enum ItineraryError {
    #[error("Itinerary activity not found")]
    NotFound,

    #[error("Destination not found")]
    DestinationNotFound,

    #[error("No itinerary activities found for destination {0}")]
    NoneForDestination(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for ItineraryError {
    fn from(err: AppError) -> Self {
        ItineraryError::Internal(err.to_string())
    }
}

impl From<ItineraryError> for AppError {
    fn from(err: ItineraryError) -> Self {
        match err {
            ItineraryError::Internal(msg) => AppError::Internal(msg),
            other => AppError::NotFound(other.to_string()),
        }
    }
}

/// ItineraryService implementation
pub struct ItineraryServiceImpl {
    itinerary_repo: Arc<dyn ItineraryRepository>,
}

impl ItineraryServiceImpl {
    pub fn new(itinerary_repo: Arc<dyn ItineraryRepository>) -> Self {
        Self { itinerary_repo }
    }

    async fn find_owned(
        &self,
        destination_id: i64,
        itinerary_id: i64,
    ) -> Result<Itinerary, ItineraryError> {
        self.itinerary_repo
            .find_by_id(itinerary_id)
            .await?
            .filter(|i| i.belongs_to(destination_id))
            .ok_or(ItineraryError::NotFound)
    }
}

#[async_trait]
impl ItineraryService for ItineraryServiceImpl {
    async fn list_itineraries(&self) -> Result<Vec<Itinerary>, ItineraryError> {
        Ok(self.itinerary_repo.find_all().await?)
    }

    async fn list_for_destination(
        &self,
        destination_id: i64,
    ) -> Result<Vec<Itinerary>, ItineraryError> {
        let activities = self
            .itinerary_repo
            .find_by_destination(destination_id)
            .await?;
        if activities.is_empty() {
            return Err(ItineraryError::NoneForDestination(destination_id));
        }
        Ok(activities)
    }

    async fn get_activity(
        &self,
        destination_id: i64,
        itinerary_id: i64,
    ) -> Result<Itinerary, ItineraryError> {
        self.find_owned(destination_id, itinerary_id).await
    }

    async fn add_activity(
        &self,
        destination_id: i64,
        fields: ItineraryFields,
    ) -> Result<Itinerary, ItineraryError> {
        let itinerary = self
            .itinerary_repo
            .create(destination_id, &fields)
            .await?
            .ok_or(ItineraryError::DestinationNotFound)?;

        metrics::record_mutation("itinerary", "create");
        info!(destination_id, itinerary_id = itinerary.id, "Itinerary activity added");
        Ok(itinerary)
    }

    async fn update_activity(
        &self,
        destination_id: i64,
        itinerary_id: i64,
        fields: ItineraryFields,
    ) -> Result<Itinerary, ItineraryError> {
        self.find_owned(destination_id, itinerary_id).await?;

        let itinerary = self
            .itinerary_repo
            .update(itinerary_id, &fields)
            .await?
            .ok_or(ItineraryError::NotFound)?;

        metrics::record_mutation("itinerary", "update");
        info!(destination_id, itinerary_id, "Itinerary activity updated");
        Ok(itinerary)
    }

    async fn delete_activity(
        &self,
        destination_id: i64,
        itinerary_id: i64,
    ) -> Result<(), ItineraryError> {
        self.find_owned(destination_id, itinerary_id).await?;

        if !self.itinerary_repo.delete(itinerary_id).await? {
            return Err(ItineraryError::NotFound);
        }

        metrics::record_mutation("itinerary", "delete");
        info!(destination_id, itinerary_id, "Itinerary activity deleted");
        Ok(())
    }
}
