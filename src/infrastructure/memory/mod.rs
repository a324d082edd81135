//! In-Memory Store
//!
//! Process-local implementation of all three repository traits. All tables
//! live behind one lock so a cascading destination delete is observed as a
//! single step. Used by tests and by `database.backend = "memory"`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{
    Destination, DestinationFields, DestinationRepository, Expense, ExpenseFields,
    ExpenseRepository, Itinerary, ItineraryFields, ItineraryRepository,
};
use crate::shared::error::AppError;

/// Tables keyed by id; ids only grow so map order is insertion order.
#[derive(Debug, Default)]
struct Tables {
    destinations: BTreeMap<i64, Destination>,
    expenses: BTreeMap<i64, Expense>,
    itineraries: BTreeMap<i64, Itinerary>,
    last_destination_id: i64,
    last_expense_id: i64,
    last_itinerary_id: i64,
}

/// In-memory entity store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row counts for (destinations, expenses, itineraries).
    pub fn counts(&self) -> (usize, usize, usize) {
        let tables = self.tables.read();
        (
            tables.destinations.len(),
            tables.expenses.len(),
            tables.itineraries.len(),
        )
    }
}

#[async_trait]
impl DestinationRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Destination>, AppError> {
        Ok(self.tables.read().destinations.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Destination>, AppError> {
        Ok(self.tables.read().destinations.get(&id).cloned())
    }

    async fn create(&self, fields: &DestinationFields) -> Result<Destination, AppError> {
        let mut tables = self.tables.write();
        tables.last_destination_id += 1;
        let destination = Destination::from_fields(tables.last_destination_id, fields.clone());
        tables
            .destinations
            .insert(destination.id, destination.clone());
        Ok(destination)
    }

    async fn update(
        &self,
        id: i64,
        fields: &DestinationFields,
    ) -> Result<Option<Destination>, AppError> {
        let mut tables = self.tables.write();
        Ok(tables.destinations.get_mut(&id).map(|destination| {
            *destination = Destination::from_fields(id, fields.clone());
            destination.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.write();
        if tables.destinations.remove(&id).is_none() {
            return Ok(false);
        }
        tables.expenses.retain(|_, e| e.destination_id != id);
        tables.itineraries.retain(|_, i| i.destination_id != id);
        Ok(true)
    }
}

#[async_trait]
impl ExpenseRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Expense>, AppError> {
        Ok(self.tables.read().expenses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Expense>, AppError> {
        Ok(self.tables.read().expenses.get(&id).cloned())
    }

    async fn find_by_destination(&self, destination_id: i64) -> Result<Vec<Expense>, AppError> {
        Ok(self
            .tables
            .read()
            .expenses
            .values()
            .filter(|e| e.belongs_to(destination_id))
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        destination_id: i64,
        fields: &ExpenseFields,
    ) -> Result<Option<Expense>, AppError> {
        let mut tables = self.tables.write();
        if !tables.destinations.contains_key(&destination_id) {
            return Ok(None);
        }
        tables.last_expense_id += 1;
        let expense = Expense {
            id: tables.last_expense_id,
            destination_id,
            category: fields.category.clone(),
            amount: fields.amount,
        };
        tables.expenses.insert(expense.id, expense.clone());
        Ok(Some(expense))
    }

    async fn update(&self, id: i64, fields: &ExpenseFields) -> Result<Option<Expense>, AppError> {
        let mut tables = self.tables.write();
        Ok(tables.expenses.get_mut(&id).map(|expense| {
            expense.category = fields.category.clone();
            expense.amount = fields.amount;
            expense.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.tables.write().expenses.remove(&id).is_some())
    }
}

#[async_trait]
impl ItineraryRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Itinerary>, AppError> {
        Ok(self.tables.read().itineraries.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Itinerary>, AppError> {
        Ok(self.tables.read().itineraries.get(&id).cloned())
    }

    async fn find_by_destination(
        &self,
        destination_id: i64,
    ) -> Result<Vec<Itinerary>, AppError> {
        Ok(self
            .tables
            .read()
            .itineraries
            .values()
            .filter(|i| i.belongs_to(destination_id))
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        destination_id: i64,
        fields: &ItineraryFields,
    ) -> Result<Option<Itinerary>, AppError> {
        let mut tables = self.tables.write();
        if !tables.destinations.contains_key(&destination_id) {
            return Ok(None);
        }
        tables.last_itinerary_id += 1;
        let itinerary = Itinerary {
            id: tables.last_itinerary_id,
            destination_id,
            activity: fields.activity.clone(),
        };
        tables.itineraries.insert(itinerary.id, itinerary.clone());
        Ok(Some(itinerary))
    }

    async fn update(
        &self,
        id: i64,
        fields: &ItineraryFields,
    ) -> Result<Option<Itinerary>, AppError> {
        let mut tables = self.tables.write();
        Ok(tables.itineraries.get_mut(&id).map(|itinerary| {
            itinerary.activity = fields.activity.clone();
            itinerary.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.tables.write().itineraries.remove(&id).is_some())
    }
}
