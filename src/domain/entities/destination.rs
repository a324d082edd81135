//! Destination entity and repository trait.
//!
//! Maps to the `destinations` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A place a traveller plans to visit.
///
/// Maps to the `destinations` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(255) NOT NULL
/// - description: VARCHAR(255) NULL
/// - location: VARCHAR(255) NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// System-assigned identifier, never reused
    pub id: i64,

    /// Display name
    pub name: String,

    /// Free-form notes
    pub description: Option<String>,

    /// Where the destination is (city, country, ...)
    pub location: String,
}

/// User-supplied destination fields, used for both create and full replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationFields {
    pub name: String,
    pub description: Option<String>,
    pub location: String,
}

impl Destination {
    /// Build a destination from its identifier and user-supplied fields.
    pub fn from_fields(id: i64, fields: DestinationFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            location: fields.location,
        }
    }
}

/// Repository trait for Destination data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// All destinations in insertion order.
    async fn find_all(&self) -> Result<Vec<Destination>, AppError>;

    /// Find a destination by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Destination>, AppError>;

    /// Create a new destination and return it with its assigned ID.
    async fn create(&self, fields: &DestinationFields) -> Result<Destination, AppError>;

    /// Replace the user-supplied fields. Returns `None` if the ID does not exist.
    async fn update(
        &self,
        id: i64,
        fields: &DestinationFields,
    ) -> Result<Option<Destination>, AppError>;

    /// Delete a destination together with its expenses and itinerary activities.
    ///
    /// Returns `false` if the ID does not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
