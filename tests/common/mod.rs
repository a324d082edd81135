//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum_test::TestServer;
use fake::faker::address::en::{CityName, CountryName};
use fake::Fake;
use serde_json::{json, Value};

use wanderlust::config::Settings;
use wanderlust::infrastructure::Store;
use wanderlust::startup::{build_router, AppState};

/// Test application over a fresh in-memory store
pub struct TestApp {
    pub server: TestServer,
    pub store: Store,
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let store = Store::in_memory();
        let state = AppState::new(store.clone(), Settings::in_memory());
        let server = TestServer::new(build_router(state)).expect("failed to start test server");

        Self { server, store }
    }

    /// Create a destination and return its id
    pub async fn create_destination(&self, name: &str, location: &str) -> i64 {
        let response = self
            .server
            .post("/destinations")
            .json(&json!({ "name": name, "location": location }))
            .await;
        response.assert_status_ok();
        created_id(&response.json::<Value>())
    }

    /// Create a destination with generated name and location
    pub async fn create_random_destination(&self) -> i64 {
        let (city, country) = random_place();
        self.create_destination(&city, &country).await
    }

    /// Add an expense and return its id
    pub async fn add_expense(&self, destination_id: i64, category: &str, amount: f64) -> i64 {
        let response = self
            .server
            .post(&format!("/expenses/{}", destination_id))
            .json(&json!({ "category": category, "amount": amount }))
            .await;
        response.assert_status_ok();
        created_id(&response.json::<Value>())
    }

    /// Add an itinerary activity and return its id
    pub async fn add_activity(&self, destination_id: i64, activity: &str) -> i64 {
        let response = self
            .server
            .post(&format!("/itineraries/{}", destination_id))
            .json(&json!({ "activity": activity }))
            .await;
        response.assert_status_ok();
        created_id(&response.json::<Value>())
    }

    /// Row counts of (destinations, expenses, itineraries)
    pub fn counts(&self) -> (usize, usize, usize) {
        match &self.store {
            Store::Memory(memory) => memory.counts(),
            Store::Postgres(_) => unreachable!("test app always runs in memory"),
        }
    }
}

/// Extract the `id` of a creation acknowledgement
pub fn created_id(body: &Value) -> i64 {
    body["id"].as_i64().expect("creation response carries an id")
}

/// A generated (city, country) pair
pub fn random_place() -> (String, String) {
    (CityName().fake(), CountryName().fake())
}
