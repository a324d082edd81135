//! Expense entity and repository trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Money spent (or budgeted) at a destination.
///
/// Maps to the `expenses` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - destination_id: BIGINT NOT NULL REFERENCES destinations(id)
/// - category: VARCHAR(255) NOT NULL
/// - amount: DOUBLE PRECISION NOT NULL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,

    /// Owning destination
    pub destination_id: i64,

    /// Spending category, e.g. "food" or "lodging"
    pub category: String,

    /// Amount; refunds may be negative
    pub amount: f64,
}

/// User-supplied expense fields. The owning destination is never part of an update.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFields {
    pub category: String,
    pub amount: f64,
}

impl Expense {
    /// Whether this expense belongs to the given destination.
    pub fn belongs_to(&self, destination_id: i64) -> bool {
        self.destination_id == destination_id
    }
}

/// Repository trait for Expense data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// All expenses in insertion order.
    async fn find_all(&self) -> Result<Vec<Expense>, AppError>;

    /// Find an expense by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Expense>, AppError>;

    /// Expenses recorded against one destination, in insertion order.
    async fn find_by_destination(&self, destination_id: i64) -> Result<Vec<Expense>, AppError>;

    /// Create an expense under a destination.
    ///
    /// Returns `None`, creating nothing, when the destination does not exist.
    async fn create(
        &self,
        destination_id: i64,
        fields: &ExpenseFields,
    ) -> Result<Option<Expense>, AppError>;

    /// Replace category and amount. Returns `None` if the ID does not exist.
    async fn update(&self, id: i64, fields: &ExpenseFields) -> Result<Option<Expense>, AppError>;

    /// Delete a single expense. Returns `false` if the ID does not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
