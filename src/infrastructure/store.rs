//! Entity Store Handle
//!
//! One explicitly constructed handle per process. It is opened at startup,
//! injected into the services, and closed on shutdown.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::{DatabaseSettings, StorageBackend};
use crate::domain::{DestinationRepository, ExpenseRepository, ItineraryRepository};
use crate::infrastructure::database;
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::repositories::{
    PgDestinationRepository, PgExpenseRepository, PgItineraryRepository,
};
use crate::shared::error::AppError;

/// Storage backend handle.
#[derive(Clone)]
pub enum Store {
    Postgres(PgPool),
    Memory(Arc<MemoryStore>),
}

impl Store {
    /// Open the configured backend and verify its schema.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, AppError> {
        match settings.backend {
            StorageBackend::Postgres => {
                let pool = database::create_pool(settings).await?;
                database::ensure_schema(&pool).await?;
                Ok(Store::Postgres(pool))
            }
            StorageBackend::Memory => Ok(Self::in_memory()),
        }
    }

    /// A fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Store::Memory(Arc::new(MemoryStore::new()))
    }

    pub fn backend(&self) -> StorageBackend {
        match self {
            Store::Postgres(_) => StorageBackend::Postgres,
            Store::Memory(_) => StorageBackend::Memory,
        }
    }

    pub fn destinations(&self) -> Arc<dyn DestinationRepository> {
        match self {
            Store::Postgres(pool) => Arc::new(PgDestinationRepository::new(pool.clone())),
            Store::Memory(store) => store.clone(),
        }
    }

    pub fn expenses(&self) -> Arc<dyn ExpenseRepository> {
        match self {
            Store::Postgres(pool) => Arc::new(PgExpenseRepository::new(pool.clone())),
            Store::Memory(store) => store.clone(),
        }
    }

    pub fn itineraries(&self) -> Arc<dyn ItineraryRepository> {
        match self {
            Store::Postgres(pool) => Arc::new(PgItineraryRepository::new(pool.clone())),
            Store::Memory(store) => store.clone(),
        }
    }

    /// Round-trip to the backend.
    pub async fn ping(&self) -> Result<(), AppError> {
        match self {
            Store::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
                Ok(())
            }
            Store::Memory(_) => Ok(()),
        }
    }

    /// Close pooled connections; waits for checked-out connections to return.
    pub async fn close(&self) {
        if let Store::Postgres(pool) = self {
            pool.close().await;
        }
        tracing::info!(backend = %self.backend(), "Entity store closed");
    }
}
