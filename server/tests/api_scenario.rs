//! End-to-end tests for the reservation HTTP API.
//!
//! Spawns the full router on an ephemeral port and drives it over HTTP,
//! including the newline-delimited JSON section stream.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use trainbook_core::{Capacity, ReservationEngine};
use trainbook_server::{build_router, AppState};

/// Spawns the app over the given capacities; returns its base URL.
async fn spawn_app(capacities: &[(&str, u32)]) -> String {
    let capacities: HashMap<String, Capacity> = capacities
        .iter()
        .map(|(name, count)| ((*name).to_string(), Capacity::new(*count)))
        .collect();
    let engine = Arc::new(ReservationEngine::new(capacities));
    let app = build_router(AppState::new(engine));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn purchase_body(email: &str, section: &str) -> Value {
    json!({
        "origin": "London",
        "destination": "Paris",
        "owner": {
            "first_name": "Deepak",
            "last_name": "Kumar",
            "email": email,
        },
        "price_cents": 2000,
        "section": section,
    })
}

#[tokio::test]
async fn purchase_receipt_cancel_scenario() {
    let base = spawn_app(&[("A", 1), ("B", 0)]).await;
    let client = reqwest::Client::new();

    // Purchase the only seat in section A.
    let response = client
        .post(format!("{base}/api/tickets"))
        .json(&purchase_body("deepak@example.com", "A"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let ticket: Value = response.json().await.unwrap();
    assert_eq!(ticket["section"], "A");
    assert_eq!(ticket["owner"]["email"], "deepak@example.com");
    assert_eq!(ticket["price_cents"], 2000);

    // Section B has zero capacity.
    let response = client
        .post(format!("{base}/api/tickets"))
        .json(&purchase_body("other@example.com", "B"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["code"], "CONFLICT");

    // The receipt comes back identical.
    let response = client
        .get(format!("{base}/api/tickets/deepak@example.com"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let receipt: Value = response.json().await.unwrap();
    assert_eq!(receipt, ticket);

    // Availability shows section A sold out.
    let response = client
        .get(format!("{base}/api/sections"))
        .send()
        .await
        .unwrap();
    let report: Value = response.json().await.unwrap();
    assert_eq!(report[0]["section"], "A");
    assert_eq!(report[0]["remaining"], 0);
    assert_eq!(report[0]["capacity"], 1);

    // Cancelling returns the ticket and frees the seat.
    let response = client
        .delete(format!("{base}/api/tickets/deepak@example.com"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let cancelled: Value = response.json().await.unwrap();
    assert_eq!(cancelled, ticket);

    let response = client
        .get(format!("{base}/api/sections"))
        .send()
        .await
        .unwrap();
    let report: Value = response.json().await.unwrap();
    assert_eq!(report[0]["remaining"], 1);

    // The receipt is gone.
    let response = client
        .get(format!("{base}/api/tickets/deepak@example.com"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn section_stream_yields_one_ticket_per_line_in_order() {
    let base = spawn_app(&[("A", 20), ("B", 20)]).await;
    let client = reqwest::Client::new();

    for (email, section) in [
        ("first@example.com", "A"),
        ("second@example.com", "B"),
        ("third@example.com", "A"),
    ] {
        let response = client
            .post(format!("{base}/api/tickets"))
            .json(&purchase_body(email, section))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
    }

    let response = client
        .get(format!("{base}/api/sections/A/tickets"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/x-ndjson")
    );

    let body = response.text().await.unwrap();
    let tickets: Vec<Value> = body
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let emails: Vec<&str> = tickets
        .iter()
        .map(|t| t["owner"]["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["first@example.com", "third@example.com"]);

    // A valid empty section streams an empty body, not an error.
    let response = client
        .get(format!("{base}/api/sections/B/tickets"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    let remaining: Vec<&str> = body.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(remaining.len(), 1); // second@example.com only

    // An unconfigured section is a client error.
    let response = client
        .get(format!("{base}/api/sections/Z/tickets"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn duplicate_purchase_and_seat_moves_over_http() {
    let base = spawn_app(&[("A", 2), ("B", 1)]).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/tickets"))
        .json(&purchase_body("deepak@example.com", "A"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    // A second ticket under the same email is refused.
    let response = client
        .post(format!("{base}/api/tickets"))
        .json(&purchase_body("deepak@example.com", "A"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);

    // Move the ticket into section B.
    let response = client
        .put(format!("{base}/api/tickets/deepak@example.com/section"))
        .json(&json!({ "section": "B" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let moved: Value = response.json().await.unwrap();
    assert_eq!(moved["section"], "B");

    // B is now full; a second mover is refused and stays where they were.
    let response = client
        .post(format!("{base}/api/tickets"))
        .json(&purchase_body("other@example.com", "A"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let response = client
        .put(format!("{base}/api/tickets/other@example.com/section"))
        .json(&json!({ "section": "B" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
    let response = client
        .get(format!("{base}/api/tickets/other@example.com"))
        .send()
        .await
        .unwrap();
    let ticket: Value = response.json().await.unwrap();
    assert_eq!(ticket["section"], "A");

    // Moving to an unconfigured section is a client error.
    let response = client
        .put(format!("{base}/api/tickets/other@example.com/section"))
        .json(&json!({ "section": "Z" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // Validation failures carry the VALIDATION_ERROR code.
    let response = client
        .post(format!("{base}/api/tickets"))
        .json(&purchase_body("", "A"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);
    let error: Value = response.json().await.unwrap();
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn health_probes_respond() {
    let base = spawn_app(&[("A", 1)]).await;
    let client = reqwest::Client::new();

    for path in ["/health", "/ready"] {
        let response = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(response.status(), 200);
    }
}
