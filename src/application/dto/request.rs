//! Request DTOs
//!
//! Data structures for API request bodies. Unknown keys are rejected.

use serde::Deserialize;
use validator::Validate;

use crate::domain::{DestinationFields, ExpenseFields, ItineraryFields};
use crate::shared::validation::{no_nul, not_blank};

/// Create or replace destination request
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DestinationRequest {
    #[validate(
        length(max = 255, message = "Name must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(
        length(max = 255, message = "Description must be at most 255 characters"),
        custom(function = "no_nul")
    )]
    pub description: Option<String>,

    #[validate(
        length(max = 255, message = "Location must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub location: String,
}

impl From<DestinationRequest> for DestinationFields {
    fn from(request: DestinationRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            location: request.location,
        }
    }
}

/// Create or replace expense request
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ExpenseRequest {
    #[validate(
        length(max = 255, message = "Category must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub category: String,

    pub amount: f64,
}

impl From<ExpenseRequest> for ExpenseFields {
    fn from(request: ExpenseRequest) -> Self {
        Self {
            category: request.category,
            amount: request.amount,
        }
    }
}

/// Create or replace itinerary activity request
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ItineraryRequest {
    #[validate(
        length(max = 255, message = "Activity must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub activity: String,
}

impl From<ItineraryRequest> for ItineraryFields {
    fn from(request: ItineraryRequest) -> Self {
        Self {
            activity: request.activity,
        }
    }
}
