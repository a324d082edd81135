//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **DestinationRepository** - destinations, with cascading delete
//! - **ExpenseRepository** - expenses scoped to a destination
//! - **ItineraryRepository** - itinerary activities scoped to a destination
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{
//!     PgDestinationRepository, PgExpenseRepository, PgItineraryRepository,
//! };
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let destination_repo = PgDestinationRepository::new(pool.clone());
//!     let expense_repo = PgExpenseRepository::new(pool.clone());
//!     let itinerary_repo = PgItineraryRepository::new(pool.clone());
//! }
//! ```

pub mod destination_repository;
pub mod expense_repository;
pub mod itinerary_repository;

pub use destination_repository::PgDestinationRepository;
pub use expense_repository::PgExpenseRepository;
pub use itinerary_repository::PgItineraryRepository;
