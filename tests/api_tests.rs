//! API integration tests
//!
//! These run against a live server with a reachable database.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5555";

/// Create a book and return the response body
async fn create_book(client: &Client, title: &str, author: &str, year: Value) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": author,
            "publishYear": year
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse create response")
}

async fn list_count(client: &Client) -> i64 {
    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse list response");
    body["count"].as_i64().expect("count should be a number")
}

async fn delete_book(client: &Client, id: &str) {
    let _ = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_greeting() {
    let client = Client::new();

    let response = client
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 234);
    assert_eq!(response.text().await.expect("no body"), "Hello World!");
}

#[tokio::test]
#[ignore]
async fn test_create_returns_record_with_id() {
    let client = Client::new();

    let body = create_book(&client, "The Dispossessed", "Ursula K. Le Guin", json!(1974)).await;

    assert_eq!(body["title"], "The Dispossessed");
    assert_eq!(body["author"], "Ursula K. Le Guin");
    assert_eq!(body["publishYear"], 1974);
    let id = body["id"].as_str().expect("No book id");
    assert!(!id.is_empty());

    delete_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_create_keeps_textual_year_as_submitted() {
    let client = Client::new();

    let body = create_book(&client, "Solaris", "Stanislaw Lem", json!("1961")).await;
    assert_eq!(body["publishYear"], "1961");

    delete_book(&client, body["id"].as_str().expect("No book id")).await;
}

#[tokio::test]
#[ignore]
async fn test_create_missing_field_is_rejected_and_not_persisted() {
    let client = Client::new();
    let before = list_count(&client).await;

    for payload in [
        json!({ "author": "A", "publishYear": 2000 }),
        json!({ "title": "T", "publishYear": 2000 }),
        json!({ "title": "T", "author": "A" }),
        json!({ "title": "", "author": "A", "publishYear": 2000 }),
        json!({ "title": "T", "author": "A", "publishYear": 0 }),
    ] {
        let response = client
            .post(format!("{}/books", BASE_URL))
            .json(&payload)
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 400, "payload: {payload}");
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["message"], "Data fields missing");
    }

    assert_eq!(list_count(&client).await, before);
}

#[tokio::test]
#[ignore]
async fn test_list_counts_created_records() {
    let client = Client::new();
    let before = list_count(&client).await;

    let a = create_book(&client, "Dune", "Frank Herbert", json!(1965)).await;
    let b = create_book(&client, "Dune Messiah", "Frank Herbert", json!(1969)).await;

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");

    assert_eq!(body["count"].as_i64(), Some(before + 2));
    let data = body["data"].as_array().expect("data should be an array");
    for created in [&a, &b] {
        assert!(
            data.iter().any(|book| book["id"] == created["id"]),
            "created book should appear in the listing"
        );
    }

    delete_book(&client, a["id"].as_str().expect("No book id")).await;
    delete_book(&client, b["id"].as_str().expect("No book id")).await;
}

#[tokio::test]
#[ignore]
async fn test_get_round_trip() {
    let client = Client::new();

    let created = create_book(&client, "Hyperion", "Dan Simmons", json!(1989)).await;
    let id = created["id"].as_str().expect("No book id");

    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"], created);

    delete_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_get_absent_id_yields_null_book_not_404() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/books/00000000-0000-0000-0000-000000000000",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["book"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_get_malformed_id_is_a_store_failure() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/not-a-valid-id", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_update_absent_id_yields_404() {
    let client = Client::new();

    let response = client
        .put(format!(
            "{}/books/00000000-0000-0000-0000-000000000000",
            BASE_URL
        ))
        .json(&json!({
            "title": "T",
            "author": "A",
            "publishYear": 2000
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
#[ignore]
async fn test_update_replaces_fields_and_keeps_id() {
    let client = Client::new();

    let created = create_book(&client, "Draft Title", "Draft Author", json!(1999)).await;
    let id = created["id"].as_str().expect("No book id");

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({
            "title": "Final Title",
            "author": "Final Author",
            "publishYear": 2001
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book updated successfully");

    // Re-read: the new fields are visible, the id is unchanged
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["id"].as_str(), Some(id));
    assert_eq!(body["book"]["title"], "Final Title");
    assert_eq!(body["book"]["author"], "Final Author");
    assert_eq!(body["book"]["publishYear"], 2001);

    delete_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_update_missing_field_is_rejected() {
    let client = Client::new();

    let created = create_book(&client, "Kept", "Kept Author", json!(1980)).await;
    let id = created["id"].as_str().expect("No book id");

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({ "title": "Only a title" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Data fields missing");

    // The record is untouched
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["title"], "Kept");

    delete_book(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_is_permanent() {
    let client = Client::new();

    let created = create_book(&client, "Ephemeral", "Nobody", json!(2024)).await;
    let id = created["id"].as_str().expect("No book id");

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book deleted successfully");

    // Gone for good: get sees null, a second delete sees 404
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["book"].is_null());

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book not found");
}
