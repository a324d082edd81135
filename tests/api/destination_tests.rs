//! Destination API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{created_id, random_place, TestApp};

#[tokio::test]
async fn test_root_says_hello() {
    let app = TestApp::new();

    let response = app.server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "message": "Hello, World!" }));
}

#[tokio::test]
async fn test_create_then_get_round_trips_fields() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/destinations")
        .json(&json!({
            "name": "Reykjavik",
            "description": "Northern lights",
            "location": "Iceland"
        }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Destination created successfully");
    let id = created_id(&body);

    let fetched = app.server.get(&format!("/destinations/{}", id)).await;
    fetched.assert_status_ok();
    assert_eq!(
        fetched.json::<Value>(),
        json!({
            "id": id,
            "name": "Reykjavik",
            "description": "Northern lights",
            "location": "Iceland"
        })
    );
}

#[tokio::test]
async fn test_ids_are_unique() {
    let app = TestApp::new();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(app.create_random_destination().await);
    }

    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn test_list_returns_destinations_in_insertion_order() {
    let app = TestApp::new();
    let (city, country) = random_place();
    let first = app.create_destination("Paris", "France").await;
    let second = app.create_destination(&city, &country).await;

    let response = app.server.get("/destinations").await;

    response.assert_status_ok();
    let listed = response.json::<Vec<Value>>();
    let ids: Vec<i64> = listed.iter().map(|d| d["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(listed[0]["description"], Value::Null);
}

#[tokio::test]
async fn test_get_missing_destination_is_not_found() {
    let app = TestApp::new();

    let response = app.server.get("/destinations/404").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Destination not found");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_input() {
    let app = TestApp::new();

    let response = app.server.get("/destinations/paris").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_case(json!({ "location": "France" }) ; "missing name")]
#[test_case(json!({ "name": "Paris" }) ; "missing location")]
#[test_case(json!({ "name": "", "location": "France" }) ; "empty name")]
#[test_case(json!({ "name": "Paris", "location": "   " }) ; "blank location")]
#[test_case(json!({ "name": 7, "location": "France" }) ; "name not a string")]
#[test_case(json!({ "name": "Paris", "location": "France", "rating": 5 }) ; "unknown key")]
#[tokio::test]
async fn test_create_rejects_bad_input(body: Value) {
    let app = TestApp::new();

    let response = app.server.post("/destinations").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.server.get("/destinations").await.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_bad_input() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/destinations")
        .content_type("application/json")
        .text("{\"name\": ")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let app = TestApp::new();
    let id = app.create_destination("Kyoto", "Japan").await;

    let response = app
        .server
        .put(&format!("/destinations/{}", id))
        .json(&json!({ "name": "Osaka", "description": "Street food", "location": "Japan" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Destination updated successfully" })
    );
    let fetched = app
        .server
        .get(&format!("/destinations/{}", id))
        .await
        .json::<Value>();
    assert_eq!(fetched["name"], "Osaka");
    assert_eq!(fetched["description"], "Street food");
}

#[tokio::test]
async fn test_update_without_name_is_bad_input() {
    let app = TestApp::new();
    let id = app.create_destination("Kyoto", "Japan").await;

    let response = app
        .server
        .put(&format!("/destinations/{}", id))
        .json(&json!({ "location": "Japan" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let fetched = app
        .server
        .get(&format!("/destinations/{}", id))
        .await
        .json::<Value>();
    assert_eq!(fetched["name"], "Kyoto");
}

#[tokio::test]
async fn test_update_missing_destination_leaves_store_unchanged() {
    let app = TestApp::new();
    let id = app.create_destination("Kyoto", "Japan").await;

    let response = app
        .server
        .put(&format!("/destinations/{}", id + 1))
        .json(&json!({ "name": "Nara", "location": "Japan" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let listed = app.server.get("/destinations").await.json::<Vec<Value>>();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Kyoto");
}

#[tokio::test]
async fn test_delete_missing_destination_is_not_found() {
    let app = TestApp::new();

    let response = app.server.delete("/destinations/12").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validation_reports_every_failing_field() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/destinations")
        .json(&json!({ "name": " ", "location": " " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "code": 10007,
            "message": "location: must not be blank",
            "errors": [
                { "field": "location", "message": "must not be blank" },
                { "field": "name", "message": "must not be blank" }
            ]
        })
    );
}

#[tokio::test]
async fn test_nul_character_is_bad_input() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/destinations")
        .json(&json!({ "name": "Paris\0", "location": "France" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["errors"][0]["field"], "name");
    assert_eq!(app.counts(), (0, 0, 0));
}

#[test_case("+1" ; "leading plus")]
#[test_case("01x" ; "trailing garbage")]
#[test_case("-1" ; "negative")]
#[tokio::test]
async fn test_non_canonical_id_is_bad_input(raw: &str) {
    let app = TestApp::new();
    app.create_destination("Paris", "France").await;

    let response = app.server.get(&format!("/destinations/{}", raw)).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Invalid destination ID");
}
