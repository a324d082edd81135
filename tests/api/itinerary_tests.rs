//! Itinerary API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::TestApp;

#[tokio::test]
async fn test_add_and_list_activities() {
    let app = TestApp::new();
    let destination = app.create_destination("Cusco", "Peru").await;

    let response = app
        .server
        .post(&format!("/itineraries/{}", destination))
        .json(&json!({ "activity": "Hike to Machu Picchu" }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Itinerary activity added successfully");
    let hike = body["id"].as_i64().unwrap();
    let market = app.add_activity(destination, "San Pedro market").await;

    let listed = app.server.get(&format!("/itineraries/{}", destination)).await;

    listed.assert_status_ok();
    assert_eq!(
        listed.json::<Value>(),
        json!([
            { "id": hike, "activity": "Hike to Machu Picchu" },
            { "id": market, "activity": "San Pedro market" }
        ])
    );
}

#[tokio::test]
async fn test_list_all_activities() {
    let app = TestApp::new();
    let first = app.create_random_destination().await;
    let second = app.create_random_destination().await;
    app.add_activity(first, "Walking tour").await;
    app.add_activity(second, "Cooking class").await;

    let response = app.server.get("/itineraries").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 2);
}

#[tokio::test]
async fn test_empty_itinerary_is_not_found() {
    let app = TestApp::new();
    let destination = app.create_random_destination().await;

    let response = app
        .server
        .get(&format!("/itineraries/{}", destination))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        format!("No itinerary activities found for destination {}", destination)
    );
}

#[tokio::test]
async fn test_add_to_missing_destination_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/itineraries/3")
        .json(&json!({ "activity": "Snorkeling" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(app.counts(), (0, 0, 0));
}

#[test_case(json!({}) ; "missing activity")]
#[test_case(json!({ "activity": " " }) ; "blank activity")]
#[test_case(json!({ "activity": ["a", "b"] }) ; "activity not a string")]
#[test_case(json!({ "activity": "Museum", "time": "10:00" }) ; "unknown key")]
#[tokio::test]
async fn test_add_rejects_bad_input(body: Value) {
    let app = TestApp::new();
    let destination = app.create_random_destination().await;

    let response = app
        .server
        .post(&format!("/itineraries/{}", destination))
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.counts(), (1, 0, 0));
}

#[tokio::test]
async fn test_update_activity() {
    let app = TestApp::new();
    let destination = app.create_random_destination().await;
    let id = app.add_activity(destination, "Boat ride").await;

    let response = app
        .server
        .put(&format!("/itineraries/{}/{}", destination, id))
        .json(&json!({ "activity": "Sunset boat ride" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Itinerary activity updated successfully" })
    );
    let fetched = app
        .server
        .get(&format!("/itineraries/{}/{}", destination, id))
        .await;
    fetched.assert_status_ok();
    assert_eq!(
        fetched.json::<Value>(),
        json!({ "id": id, "activity": "Sunset boat ride" })
    );
}

#[tokio::test]
async fn test_update_missing_activity_is_not_found() {
    let app = TestApp::new();
    let destination = app.create_random_destination().await;

    let response = app
        .server
        .put(&format!("/itineraries/{}/77", destination))
        .json(&json!({ "activity": "Zip line" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Itinerary activity not found"
    );
    assert_eq!(app.counts(), (1, 0, 0));
}

#[tokio::test]
async fn test_delete_activity() {
    let app = TestApp::new();
    let destination = app.create_random_destination().await;
    let keep = app.add_activity(destination, "Museum").await;
    let casino = app.add_activity(destination, "Casino").await;

    let response = app
        .server
        .delete(&format!("/itineraries/{}/{}", destination, casino))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Itinerary activity deleted successfully" })
    );
    let listed = app
        .server
        .get(&format!("/itineraries/{}", destination))
        .await
        .json::<Value>();
    assert_eq!(listed, json!([{ "id": keep, "activity": "Museum" }]));
}

#[tokio::test]
async fn test_activity_under_other_destination_is_not_found() {
    let app = TestApp::new();
    let owner = app.create_random_destination().await;
    let other = app.create_random_destination().await;
    let id = app.add_activity(owner, "Wine tasting").await;

    let response = app
        .server
        .put(&format!("/itineraries/{}/{}", other, id))
        .json(&json!({ "activity": "Beer tasting" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let fetched = app
        .server
        .get(&format!("/itineraries/{}/{}", owner, id))
        .await
        .json::<Value>();
    assert_eq!(fetched["activity"], "Wine tasting");
}

#[tokio::test]
async fn test_non_numeric_destination_id_is_bad_input() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/itineraries/abc")
        .json(&json!({ "activity": "Museum" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Invalid destination ID"
    );
}
