//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Destination, Expense, Itinerary};

/// Plain acknowledgement, optionally carrying the id of a created record
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn created(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id: Some(id),
        }
    }
}

/// Destination response
#[derive(Debug, Serialize)]
pub struct DestinationResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
}

impl From<Destination> for DestinationResponse {
    fn from(destination: Destination) -> Self {
        Self {
            id: destination.id,
            name: destination.name,
            description: destination.description,
            location: destination.location,
        }
    }
}

/// Expense response
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: i64,
    pub category: String,
    pub amount: f64,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            category: expense.category,
            amount: expense.amount,
        }
    }
}

/// Itinerary activity response
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub id: i64,
    pub activity: String,
}

impl From<Itinerary> for ItineraryResponse {
    fn from(itinerary: Itinerary) -> Self {
        Self {
            id: itinerary.id,
            activity: itinerary.activity,
        }
    }
}
