//! Integration tests for folder operations.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn create_folder_returns_record() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": "Work" })))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["type"], "folder");
    assert_eq!(response.body["data"]["name"], "Work");
    assert!(response.body["data"]["parent_id"].is_null());
    assert!(response.body["data"]["createdAt"].is_string());
    assert!(response.body["data"]["updatedAt"].is_string());
}

#[tokio::test]
async fn create_folder_with_empty_name_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": "" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(app.store.folder_count(), 0);
}

#[tokio::test]
async fn create_folder_under_missing_parent_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({
                "name": "Orphan",
                "parent_id": "00000000-0000-0000-0000-999999999999"
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn nested_folder_appears_in_tree() {
    let app = TestApp::new();
    let work = app.create_folder("Work", None).await;
    app.create_folder("Reports", Some(&work)).await;

    let response = app.request("GET", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let roots = response.body["data"].as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["name"], "Work");
    assert_eq!(roots[0]["children"][0]["name"], "Reports");
    assert_eq!(
        roots[0]["children"][0]["parent_id"].as_str().unwrap(),
        work
    );
}

#[tokio::test]
async fn rename_folder_applies_new_name() {
    let app = TestApp::new();
    let id = app.create_folder("Drafts", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{id}"),
            Some(json!({ "name": "Archive" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Archive");
}

#[tokio::test]
async fn rename_folder_with_empty_patch_refreshes_timestamp() {
    let app = TestApp::new();
    let id = app.create_folder("Stable", None).await;

    let created = app
        .request("GET", "/api/folders", None)
        .await
        .body["data"][0]["updatedAt"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request("PUT", &format!("/api/folders/{id}"), Some(json!({})))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Stable");
    // RFC 3339 timestamps compare lexically
    assert!(response.body["data"]["updatedAt"].as_str().unwrap() >= created.as_str());
}

#[tokio::test]
async fn rename_missing_folder_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/folders/00000000-0000-0000-0000-999999999999",
            Some(json!({ "name": "ghost" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn delete_folder_with_children_is_rejected_until_emptied() {
    let app = TestApp::new();
    let parent = app.create_folder("Work", None).await;
    let child = app.create_folder("Reports", Some(&parent)).await;

    let blocked = app
        .request("DELETE", &format!("/api/folders/{parent}"), None)
        .await;
    assert_eq!(blocked.status, StatusCode::CONFLICT);
    assert_eq!(blocked.body["error"], "FOLDER_NOT_EMPTY");

    let child_gone = app
        .request("DELETE", &format!("/api/folders/{child}"), None)
        .await;
    assert_eq!(child_gone.status, StatusCode::OK);

    let parent_gone = app
        .request("DELETE", &format!("/api/folders/{parent}"), None)
        .await;
    assert_eq!(parent_gone.status, StatusCode::OK);
    assert_eq!(app.store.folder_count(), 0);
}

#[tokio::test]
async fn delete_missing_folder_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "DELETE",
            "/api/folders/00000000-0000-0000-0000-999999999999",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
