//! # Domain Entities
//!
//! Core domain entities. All entities map directly to their corresponding
//! database tables.
//!
//! - **Destination**: a place to visit; owns expenses and itinerary activities
//! - **Expense**: money recorded against a destination
//! - **Itinerary**: a planned activity at a destination
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod destination;
mod expense;
mod itinerary;

pub use destination::{Destination, DestinationFields, DestinationRepository};
pub use expense::{Expense, ExpenseFields, ExpenseRepository};
pub use itinerary::{Itinerary, ItineraryFields, ItineraryRepository};

#[cfg(test)]
pub use destination::MockDestinationRepository;
#[cfg(test)]
pub use expense::MockExpenseRepository;
#[cfg(test)]
pub use itinerary::MockItineraryRepository;
