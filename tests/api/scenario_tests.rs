//! End-to-end trip planning flows

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_plan_trip_then_cancel_it() {
    let app = TestApp::new();

    let created = app
        .server
        .post("/destinations")
        .json(&json!({ "name": "Paris", "location": "France" }))
        .await;
    created.assert_status_ok();
    assert_eq!(
        created.json::<Value>(),
        json!({ "message": "Destination created successfully", "id": 1 })
    );

    app.server
        .post("/expenses/1")
        .json(&json!({ "category": "food", "amount": 42.5 }))
        .await
        .assert_status_ok();

    let expenses = app.server.get("/expenses/1").await;
    expenses.assert_status_ok();
    assert_eq!(
        expenses.json::<Value>(),
        json!([{ "id": 1, "category": "food", "amount": 42.5 }])
    );

    let deleted = app.server.delete("/destinations/1").await;
    deleted.assert_status_ok();
    assert_eq!(
        deleted.json::<Value>(),
        json!({ "message": "Destination deleted successfully" })
    );

    app.server
        .get("/expenses/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_destination_cascades_to_children() {
    let app = TestApp::new();
    let doomed = app.create_destination("Pompeii", "Italy").await;
    let kept = app.create_destination("Naples", "Italy").await;
    for amount in [10.0, 20.0, 30.0] {
        app.add_expense(doomed, "tickets", amount).await;
    }
    app.add_activity(doomed, "Ruins tour").await;
    app.add_activity(doomed, "Vesuvius hike").await;
    app.add_expense(kept, "pizza", 9.0).await;
    app.add_activity(kept, "Harbour walk").await;
    assert_eq!(app.counts(), (2, 4, 3));

    app.server
        .delete(&format!("/destinations/{}", doomed))
        .await
        .assert_status_ok();

    assert_eq!(app.counts(), (1, 1, 1));
    app.server
        .get(&format!("/itineraries/{}", doomed))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .get(&format!("/expenses/{}", kept))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let app = TestApp::new();
    let first = app.create_random_destination().await;
    app.server
        .delete(&format!("/destinations/{}", first))
        .await
        .assert_status_ok();

    let second = app.create_random_destination().await;

    assert!(second > first);
    app.server
        .get(&format!("/destinations/{}", first))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_body_carries_code_and_message() {
    let app = TestApp::new();

    let response = app.server.delete("/destinations/5").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["code"], 10001);
    assert_eq!(body["message"], "Destination not found");
}
