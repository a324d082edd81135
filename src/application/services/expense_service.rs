//! Expense Service
//!
//! Expenses are always addressed through their owning destination.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{Expense, ExpenseFields, ExpenseRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Expense service trait
#[async_trait]
pub trait ExpenseService: Send + Sync {
    /// Every expense across all destinations
    async fn list_expenses(&self) -> Result<Vec<Expense>, ExpenseError>;

    /// Expenses of one destination; an empty result is reported as not found
    async fn list_for_destination(&self, destination_id: i64)
        -> Result<Vec<Expense>, ExpenseError>;

    async fn get_expense(&self, destination_id: i64, expense_id: i64)
        -> Result<Expense, ExpenseError>;

    async fn add_expense(
        &self,
        destination_id: i64,
        fields: ExpenseFields,
    ) -> Result<Expense, ExpenseError>;

    async fn update_expense(
        &self,
        destination_id: i64,
        expense_id: i64,
        fields: ExpenseFields,
    ) -> Result<Expense, ExpenseError>;

    async fn delete_expense(&self, destination_id: i64, expense_id: i64)
        -> Result<(), ExpenseError>;
}

/// Expense service errors
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("Expense not found")]
    NotFound,

    #[error("Destination not found")]
    DestinationNotFound,

    #[error("No expenses found for destination {0}")]
    NoneForDestination(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for ExpenseError {
    fn from(err: AppError) -> Self {
        ExpenseError::Internal(err.to_string())
    }
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::Internal(msg) => AppError::Internal(msg),
            other => AppError::NotFound(other.to_string()),
        }
    }
}

/// ExpenseService implementation
pub struct ExpenseServiceImpl {
    expense_repo: Arc<dyn ExpenseRepository>,
}

impl ExpenseServiceImpl {
    pub fn new(expense_repo: Arc<dyn ExpenseRepository>) -> Self {
        Self { expense_repo }
    }

    /// Load an expense, treating one filed under another destination as missing.
    async fn find_owned(&self, destination_id: i64, expense_id: i64) -> Result<Expense, ExpenseError> {
        self.expense_repo
            .find_by_id(expense_id)
            .await?
            .filter(|e| e.belongs_to(destination_id))
            .ok_or(ExpenseError::NotFound)
    }
}

#[async_trait]
impl ExpenseService for ExpenseServiceImpl {
    async fn list_expenses(&self) -> Result<Vec<Expense>, ExpenseError> {
        Ok(self.expense_repo.find_all().await?)
    }

    async fn list_for_destination(
        &self,
        destination_id: i64,
    ) -> Result<Vec<Expense>, ExpenseError> {
        let expenses = self.expense_repo.find_by_destination(destination_id).await?;
        if expenses.is_empty() {
            return Err(ExpenseError::NoneForDestination(destination_id));
        }
        Ok(expenses)
    }

    async fn get_expense(
        &self,
        destination_id: i64,
        expense_id: i64,
    ) -> Result<Expense, ExpenseError> {
        self.find_owned(destination_id, expense_id).await
    }

    async fn add_expense(
        &self,
        destination_id: i64,
        fields: ExpenseFields,
    ) -> Result<Expense, ExpenseError> {
        let expense = self
            .expense_repo
            .create(destination_id, &fields)
            .await?
            .ok_or(ExpenseError::DestinationNotFound)?;

        metrics::record_mutation("expense", "create");
        info!(destination_id, expense_id = expense.id, "Expense added");
        Ok(expense)
    }

    async fn update_expense(
        &self,
        destination_id: i64,
        expense_id: i64,
        fields: ExpenseFields,
    ) -> Result<Expense, ExpenseError> {
        self.find_owned(destination_id, expense_id).await?;

        let expense = self
            .expense_repo
            .update(expense_id, &fields)
            .await?
            .ok_or(ExpenseError::NotFound)?;

        metrics::record_mutation("expense", "update");
        info!(destination_id, expense_id, "Expense updated");
        Ok(expense)
    }

    async fn delete_expense(
        &self,
        destination_id: i64,
        expense_id: i64,
    ) -> Result<(), ExpenseError> {
        self.find_owned(destination_id, expense_id).await?;

        if !self.expense_repo.delete(expense_id).await? {
            return Err(ExpenseError::NotFound);
        }

        metrics::record_mutation("expense", "delete");
        info!(destination_id, expense_id, "Expense deleted");
        Ok(())
    }
}
