//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod health;
pub mod destination;
pub mod expense;
pub mod itinerary;
