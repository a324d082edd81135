//! Destination Service
//!
//! Handles destination management operations.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{Destination, DestinationFields, DestinationRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Destination service trait
#[async_trait]
pub trait DestinationService: Send + Sync {
    /// List every destination
    async fn list_destinations(&self) -> Result<Vec<Destination>, DestinationError>;

    /// Get destination by ID
    async fn get_destination(&self, destination_id: i64) -> Result<Destination, DestinationError>;

    /// Create a new destination
    async fn create_destination(
        &self,
        fields: DestinationFields,
    ) -> Result<Destination, DestinationError>;

    /// Replace a destination's fields
    async fn update_destination(
        &self,
        destination_id: i64,
        fields: DestinationFields,
    ) -> Result<Destination, DestinationError>;

    /// Delete a destination along with its expenses and itinerary
    async fn delete_destination(&self, destination_id: i64) -> Result<(), DestinationError>;
}

/// Destination service errors
#[derive(Debug, thiserror::Error)]
pub enum DestinationError {
    #[error("Destination not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for DestinationError {
    fn from(err: AppError) -> Self {
        DestinationError::Internal(err.to_string())
    }
}

impl From<DestinationError> for AppError {
    fn from(err: DestinationError) -> Self {
        match err {
            DestinationError::NotFound => AppError::NotFound(err.to_string()),
            DestinationError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// DestinationService implementation
pub struct DestinationServiceImpl {
    destination_repo: Arc<dyn DestinationRepository>,
}

impl DestinationServiceImpl {
    pub fn new(destination_repo: Arc<dyn DestinationRepository>) -> Self {
        Self { destination_repo }
    }
}

#[async_trait]
impl DestinationService for DestinationServiceImpl {
    async fn list_destinations(&self) -> Result<Vec<Destination>, DestinationError> {
        Ok(self.destination_repo.find_all().await?)
    }

    async fn get_destination(&self, destination_id: i64) -> Result<Destination, DestinationError> {
        self.destination_repo
            .find_by_id(destination_id)
            .await?
            .ok_or(DestinationError::NotFound)
    }

    async fn create_destination(
        &self,
        fields: DestinationFields,
    ) -> Result<Destination, DestinationError> {
        let destination = self.destination_repo.create(&fields).await?;

        metrics::record_mutation("destination", "create");
        info!(destination_id = destination.id, "Destination created");
        Ok(destination)
    }

    async fn update_destination(
        &self,
        destination_id: i64,
        fields: DestinationFields,
    ) -> Result<Destination, DestinationError> {
        let destination = self
            .destination_repo
            .update(destination_id, &fields)
            .await?
            .ok_or(DestinationError::NotFound)?;

        metrics::record_mutation("destination", "update");
        info!(destination_id, "Destination updated");
        Ok(destination)
    }

    async fn delete_destination(&self, destination_id: i64) -> Result<(), DestinationError> {
        if !self.destination_repo.delete(destination_id).await? {
            return Err(DestinationError::NotFound);
        }

        metrics::record_mutation("destination", "delete");
        info!(destination_id, "Destination deleted with its expenses and itinerary");
        Ok(())
    }
}
