//! # Domain Layer
//!
//! The domain layer contains the travel-planning records and the data
//! access contracts for them. It is independent of any external frameworks
//! or infrastructure concerns.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities carry only their own invariants

pub mod entities;

// Re-export commonly used types
pub use entities::*;
