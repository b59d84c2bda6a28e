//! Integration tests for document operations.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn create_document_defaults_to_titled_placeholder() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/documents",
            Some(json!({ "title": "Meeting notes" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["type"], "document");
    let content = response.body["data"]["content"].as_str().unwrap();
    assert!(content.starts_with("# Meeting notes"));
}

#[tokio::test]
async fn create_document_with_empty_title_persists_nothing() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/documents", Some(json!({ "title": "" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let listing = app.request("GET", "/api/documents", None).await;
    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(listing.body["total"], 0);
    assert_eq!(listing.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn get_document_roundtrip() {
    let app = TestApp::new();
    let id = app.create_document("Q1", Some("numbers"), None).await;

    let response = app.request("GET", &format!("/api/documents/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Q1");
    assert_eq!(response.body["data"]["content"], "numbers");
    assert!(response.body["data"]["folder_id"].is_null());
}

#[tokio::test]
async fn get_missing_document_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            "/api/documents/00000000-0000-0000-0000-999999999999",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn list_documents_filters_by_folder_and_orders_by_recency() {
    let app = TestApp::new();
    let folder = app.create_folder("Reports", None).await;

    let first = app.create_document("first", None, Some(&folder)).await;
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    let second = app.create_document("second", None, Some(&folder)).await;
    app.create_document("elsewhere", None, None).await;

    let listing = app
        .request("GET", &format!("/api/documents?folder_id={folder}"), None)
        .await;
    assert_eq!(listing.body["total"], 2);
    let data = listing.body["data"].as_array().unwrap();
    assert_eq!(data[0]["id"].as_str().unwrap(), second);
    assert_eq!(data[1]["id"].as_str().unwrap(), first);

    // Touching the older document moves it back to the front
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    app.request(
        "PUT",
        &format!("/api/documents/{first}"),
        Some(json!({ "content": "updated" })),
    )
    .await;

    let relisted = app
        .request("GET", &format!("/api/documents?folder_id={folder}"), None)
        .await;
    let data = relisted.body["data"].as_array().unwrap();
    assert_eq!(data[0]["id"].as_str().unwrap(), first);
}

#[tokio::test]
async fn update_document_applies_only_supplied_fields() {
    let app = TestApp::new();
    let id = app.create_document("Q1", Some("draft"), None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/documents/{id}"),
            Some(json!({ "content": "final" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Q1");
    assert_eq!(response.body["data"]["content"], "final");
}

#[tokio::test]
async fn update_with_null_folder_id_moves_document_to_root() {
    let app = TestApp::new();
    let folder = app.create_folder("Reports", None).await;
    let id = app.create_document("Q1", None, Some(&folder)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/documents/{id}"),
            Some(json!({ "folder_id": null })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["folder_id"].is_null());

    // The former folder no longer lists it; the full tree shows it at root
    let listing = app
        .request("GET", &format!("/api/documents?folder_id={folder}"), None)
        .await;
    assert_eq!(listing.body["total"], 0);

    let tree = app.request("GET", "/api/tree", None).await;
    let root_docs = tree.body["data"]["documents"].as_array().unwrap();
    assert_eq!(root_docs.len(), 1);
    assert_eq!(root_docs[0]["id"].as_str().unwrap(), id);
}

#[tokio::test]
async fn update_moving_into_missing_folder_is_not_found() {
    let app = TestApp::new();
    let id = app.create_document("Q1", None, None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/documents/{id}"),
            Some(json!({ "folder_id": "00000000-0000-0000-0000-999999999999" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_document_then_delete_again_is_not_found() {
    let app = TestApp::new();
    let id = app.create_document("doomed", None, None).await;

    let deleted = app
        .request("DELETE", &format!("/api/documents/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["success"], true);

    let again = app
        .request("DELETE", &format!("/api/documents/{id}"), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
