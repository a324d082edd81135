//! Application Startup
//!
//! Application building, shared state, and server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::services::{
    DestinationService, DestinationServiceImpl, ExpenseService, ExpenseServiceImpl,
    ItineraryService, ItineraryServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::Store;
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub destinations: Arc<dyn DestinationService>,
    pub expenses: Arc<dyn ExpenseService>,
    pub itineraries: Arc<dyn ItineraryService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire the services onto an opened store.
    pub fn new(store: Store, settings: Settings) -> Self {
        Self {
            destinations: Arc::new(DestinationServiceImpl::new(store.destinations())),
            expenses: Arc::new(ExpenseServiceImpl::new(store.expenses())),
            itineraries: Arc::new(ItineraryServiceImpl::new(store.itineraries())),
            store,
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with CORS and request tracing applied
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(logging::create_trace_layer())
            .layer(cors_layer),
    )
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    store: Store,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        // Open the store and verify its schema
        let store = Store::connect(&settings.database).await?;
        tracing::info!(backend = %store.backend(), "Entity store ready");

        let addr = settings.server_addr();
        let state = AppState::new(store.clone(), settings);
        let router = build_router(state);

        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            store,
        })
    }

    /// Run the server until a shutdown signal arrives, then close the store
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.store.close().await;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
