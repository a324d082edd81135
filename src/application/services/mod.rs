//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **DestinationService**: destination CRUD with cascading delete
//! - **ExpenseService**: expenses scoped to a destination
//! - **ItineraryService**: itinerary activities scoped to a destination

pub mod destination_service;
pub mod expense_service;
pub mod itinerary_service;

pub use destination_service::{DestinationError, DestinationService, DestinationServiceImpl};
pub use expense_service::{ExpenseError, ExpenseService, ExpenseServiceImpl};
pub use itinerary_service::{ItineraryError, ItineraryService, ItineraryServiceImpl};
