mod common;

use axum::http::StatusCode;
use common::{send, setup_test_app};

#[tokio::test]
async fn test_get_role_permissions() {
    let app = setup_test_app();
    let (status, body) = send(&app, "GET", "/api/permissions/attendance_marker", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "attendance_marker");
    assert_eq!(body["display_name"], "Attendance Marker");
    assert_eq!(body["actions"].as_array().unwrap().len(), 3);
    assert_eq!(body["by_resource"]["student"][0], "view-students");
}

#[tokio::test]
async fn test_unknown_role_has_no_permissions() {
    let app = setup_test_app();
    let (status, body) = send(&app, "GET", "/api/permissions/librarian", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "librarian");
    assert!(body["actions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_check_permission() {
    let app = setup_test_app();

    let (status, body) = send(&app, "GET", "/api/permissions/teacher/create-grade", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], true);

    let (_, body) = send(&app, "GET", "/api/permissions/teacher/delete-grade", None).await;
    assert_eq!(body["allowed"], false);

    let (_, body) = send(&app, "GET", "/api/permissions/institute_admin/delete-grade", None).await;
    assert_eq!(body["allowed"], true);
}

#[tokio::test]
async fn test_role_slug_is_normalized() {
    let app = setup_test_app();
    let (_, body) = send(&app, "GET", "/api/permissions/System-Admin/create-institute", None).await;
    assert_eq!(body["role"], "system_admin");
    assert_eq!(body["allowed"], true);
}

#[tokio::test]
async fn test_openapi_document_lists_console_paths() {
    let app = setup_test_app();
    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/permissions/{role}"));
    assert!(paths.contains_key("/api/sessions/{id}/selection/{level}"));
}
