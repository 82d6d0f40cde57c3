//! API integration tests

use book_crud_server::{api, config::AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Start a server on an ephemeral port and return its API base URL
async fn spawn_server(seed_sample_books: bool) -> String {
    let mut config = AppConfig::default();
    config.store.seed_sample_books = seed_sample_books;

    let state = AppState::from_config(config).expect("Failed to build state");
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}/api", addr)
}

async fn create_book(client: &Client, base: &str, body: Value) -> Value {
    let response = client
        .post(format!("{}/books", base))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

async fn list_books(client: &Client, base: &str) -> Vec<Value> {
    let response = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server(true).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_seeded_store_lists_sample_books() {
    let base = spawn_server(true).await;
    let client = Client::new();

    let books = list_books(&client, &base).await;
    assert_eq!(books.len(), 2);

    let response = client
        .get(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "1984");
    assert_eq!(body["isbn"], "9780451524935");

    let created = create_book(
        &client,
        &base,
        json!({"title": "Dune", "author": "Frank Herbert", "isbn": "9780441013593"}),
    )
    .await;
    assert_eq!(created["id"], 3);
}

#[tokio::test]
async fn test_create_list_delete_scenario() {
    let base = spawn_server(false).await;
    let client = Client::new();

    let first = create_book(
        &client,
        &base,
        json!({"title": "1984", "author": "George Orwell", "isbn": "9780451524935"}),
    )
    .await;
    assert_eq!(first["id"], 1);
    assert_eq!(first["title"], "1984");

    let second = create_book(
        &client,
        &base,
        json!({"title": "Brave New World", "author": "Aldous Huxley", "isbn": "9780060850524"}),
    )
    .await;
    assert_eq!(second["id"], 2);

    assert_eq!(list_books(&client, &base).await.len(), 2);

    let response = client
        .delete(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.text().await.expect("No body").is_empty());

    let response = client
        .get(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.expect("No body").is_empty());

    let remaining = list_books(&client, &base).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], 2);
}

#[tokio::test]
async fn test_create_ignores_payload_id_and_never_reuses_ids() {
    let base = spawn_server(false).await;
    let client = Client::new();

    let created = create_book(
        &client,
        &base,
        json!({"id": 40, "title": "Dune", "author": "Frank Herbert", "isbn": "9780441013593"}),
    )
    .await;
    assert_eq!(created["id"], 1);

    let response = client
        .delete(format!("{}/books/1", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let next = create_book(
        &client,
        &base,
        json!({"id": null, "title": "Emma", "author": "Jane Austen", "isbn": "9780141439587"}),
    )
    .await;
    assert_eq!(next["id"], 2);
}

#[tokio::test]
async fn test_update_book() {
    let base = spawn_server(true).await;
    let client = Client::new();

    let response = client
        .put(format!("{}/books/2", base))
        .json(&json!({
            "id": 77,
            "title": "Island",
            "author": "Aldous Huxley",
            "isbn": "9780060085490"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], 2);
    assert_eq!(body["title"], "Island");

    let books = list_books(&client, &base).await;
    assert_eq!(books.len(), 2);
    assert!(books.iter().all(|book| book["id"] != 77));
}

#[tokio::test]
async fn test_update_missing_book_returns_not_found() {
    let base = spawn_server(true).await;
    let client = Client::new();

    let response = client
        .put(format!("{}/books/99", base))
        .json(&json!({"title": "Ghost", "author": "Nobody", "isbn": "0"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(list_books(&client, &base).await.len(), 2);
}

#[tokio::test]
async fn test_delete_missing_book_returns_not_found() {
    let base = spawn_server(true).await;
    let client = Client::new();

    for _ in 0..2 {
        let response = client
            .delete(format!("{}/books/99", base))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    assert_eq!(list_books(&client, &base).await.len(), 2);
}
