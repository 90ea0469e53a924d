//! API integration tests
//!
//! Tests for the REST endpoints and the GraphQL query surface

use anyhow::Result;
use axum::http::StatusCode;
use axum_test::TestServer;
use gallery::database::connection::setup_database;
use gallery::server::app::create_app;
use sea_orm::Database;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

/// Create a test server backed by a throwaway SQLite file. The temp file
/// must outlive the server, so it is handed back to the caller.
async fn setup_test_server() -> Result<(TestServer, NamedTempFile)> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    let app = create_app(db, Some("*")).await?;
    let server = TestServer::new(app)?;

    Ok((server, temp_file))
}

#[tokio::test]
async fn test_root_serves_placeholder() -> Result<()> {
    let (server, _db_file) = setup_test_server().await?;

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "<h1>Hello World</h1>");

    Ok(())
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let (server, _db_file) = setup_test_server().await?;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["service"], "gallery");
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_paintings_create_and_list() -> Result<()> {
    let (server, _db_file) = setup_test_server().await?;

    // Create a fully specified painting
    let create_payload = json!({
        "name": "Starry Night",
        "url": "http://x/sn.jpg",
        "techniques": ["oil"]
    });

    let response = server.post("/api/v1/paintings").json(&create_payload).await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let painting: Value = response.json();
    let painting_id = painting["id"].as_str().unwrap().to_string();
    assert!(!painting_id.is_empty());
    assert_eq!(painting["name"], "Starry Night");
    assert_eq!(painting["url"], "http://x/sn.jpg");
    assert_eq!(painting["techniques"], json!(["oil"]));

    // List includes the stored record with its assigned id
    let response = server.get("/api/v1/paintings").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let paintings: Vec<Value> = response.json();
    assert_eq!(paintings.len(), 1);
    assert_eq!(paintings[0]["id"], painting_id.as_str());
    assert_eq!(paintings[0]["name"], "Starry Night");
    assert_eq!(paintings[0]["techniques"], json!(["oil"]));

    Ok(())
}

#[tokio::test]
async fn test_create_with_empty_body_assigns_id() -> Result<()> {
    let (server, _db_file) = setup_test_server().await?;

    // No field is required; absent fields come back null / empty
    let response = server.post("/api/v1/paintings").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let painting: Value = response.json();
    assert!(!painting["id"].as_str().unwrap().is_empty());
    assert!(painting["name"].is_null());
    assert!(painting["url"].is_null());
    assert_eq!(painting["techniques"], json!([]));

    Ok(())
}

#[tokio::test]
async fn test_create_ignores_singular_technique_field() -> Result<()> {
    let (server, _db_file) = setup_test_server().await?;

    // The canonical field is the plural `techniques`
    let response = server
        .post("/api/v1/paintings")
        .json(&json!({
            "name": "Water Lilies",
            "technique": ["oil"]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let painting: Value = response.json();
    assert_eq!(painting["name"], "Water Lilies");
    assert_eq!(painting["techniques"], json!([]));

    Ok(())
}

#[tokio::test]
async fn test_assigned_ids_are_unique() -> Result<()> {
    let (server, _db_file) = setup_test_server().await?;

    let first: Value = server
        .post("/api/v1/paintings")
        .json(&json!({"name": "One"}))
        .await
        .json();
    let second: Value = server
        .post("/api/v1/paintings")
        .json(&json!({"name": "Two"}))
        .await
        .json();

    assert_ne!(first["id"], second["id"]);

    Ok(())
}

#[tokio::test]
async fn test_graphql_painting_query() -> Result<()> {
    let (server, _db_file) = setup_test_server().await?;

    // Seed through the REST surface
    let painting: Value = server
        .post("/api/v1/paintings")
        .json(&json!({
            "name": "Starry Night",
            "url": "http://x/sn.jpg",
            "techniques": ["oil", "impasto"]
        }))
        .await
        .json();
    let painting_id = painting["id"].as_str().unwrap();

    let query = format!(
        r#"{{ painting(id: "{}") {{ id name url techniques }} }}"#,
        painting_id
    );
    let response = server.post("/graphql").json(&json!({ "query": query })).await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert!(body.get("errors").is_none());
    assert_eq!(body["data"]["painting"]["id"], painting_id);
    assert_eq!(body["data"]["painting"]["name"], "Starry Night");
    assert_eq!(body["data"]["painting"]["url"], "http://x/sn.jpg");
    assert_eq!(
        body["data"]["painting"]["techniques"],
        json!(["oil", "impasto"])
    );

    Ok(())
}

#[tokio::test]
async fn test_graphql_unknown_id_resolves_to_null() -> Result<()> {
    let (server, _db_file) = setup_test_server().await?;

    let response = server
        .post("/graphql")
        .json(&json!({
            "query": r#"{ painting(id: "no-such-id") { name } }"#
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert!(body.get("errors").is_none());
    assert!(body["data"]["painting"].is_null());

    Ok(())
}

#[tokio::test]
async fn test_graphql_explorer_is_served() -> Result<()> {
    let (server, _db_file) = setup_test_server().await?;

    let response = server.get("/graphiql").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("/graphql"));

    Ok(())
}
