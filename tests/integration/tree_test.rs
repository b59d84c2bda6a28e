//! Integration tests for full-tree materialization and deletion safety.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn empty_hierarchy_yields_empty_tree() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/tree", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["folders"].as_array().unwrap().len(), 0);
    assert_eq!(
        response.body["data"]["documents"].as_array().unwrap().len(),
        0
    );
}

#[tokio::test]
async fn full_tree_materializes_nested_hierarchy() {
    let app = TestApp::new();
    let work = app.create_folder("Work", None).await;
    let reports = app.create_folder("Reports", Some(&work)).await;
    app.create_document("Q1", None, Some(&reports)).await;

    let response = app.request("GET", "/api/tree", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    assert_eq!(data["documents"].as_array().unwrap().len(), 0);

    let folders = data["folders"].as_array().unwrap();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["name"], "Work");
    assert_eq!(folders[0]["documents"].as_array().unwrap().len(), 0);

    let children = folders[0]["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["name"], "Reports");
    assert_eq!(children[0]["children"].as_array().unwrap().len(), 0);

    let documents = children[0]["documents"].as_array().unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0]["title"], "Q1");
    assert_eq!(documents[0]["type"], "document");
}

#[tokio::test]
async fn folder_deletion_is_blocked_until_documents_are_removed() {
    let app = TestApp::new();
    let work = app.create_folder("Work", None).await;
    let reports = app.create_folder("Reports", Some(&work)).await;
    let q1 = app.create_document("Q1", None, Some(&reports)).await;

    let blocked = app
        .request("DELETE", &format!("/api/folders/{reports}"), None)
        .await;
    assert_eq!(blocked.status, StatusCode::CONFLICT);
    assert_eq!(blocked.body["error"], "FOLDER_NOT_EMPTY");

    let doc_gone = app
        .request("DELETE", &format!("/api/documents/{q1}"), None)
        .await;
    assert_eq!(doc_gone.status, StatusCode::OK);

    let folder_gone = app
        .request("DELETE", &format!("/api/folders/{reports}"), None)
        .await;
    assert_eq!(folder_gone.status, StatusCode::OK);

    // Only "Work" is left, now childless
    let tree = app.request("GET", "/api/folders", None).await;
    let roots = tree.body["data"].as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["children"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn tree_reflects_renames_immediately() {
    let app = TestApp::new();
    let id = app.create_folder("Before", None).await;

    app.request(
        "PUT",
        &format!("/api/folders/{id}"),
        Some(json!({ "name": "After" })),
    )
    .await;

    let tree = app.request("GET", "/api/tree", None).await;
    assert_eq!(tree.body["data"]["folders"][0]["name"], "After");
}
