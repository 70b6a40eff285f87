mod common;

use axum::http::StatusCode;
use serde_json::json;

use cinema_api::models::CinemaResponse;
use common::{Factory, TestApp};

#[tokio::test]
async fn test_list_cinemas_empty() {
    let app = TestApp::new().await;

    let response = app.server.get("/cinemas").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_cinema() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/cinemas")
        .json(&json!({
            "id": "1",
            "name": "gaumont"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let body: CinemaResponse = response.json();
    assert_eq!(body.id, "1");
    assert_eq!(body.name, "gaumont");
}

#[tokio::test]
async fn test_create_cinema_without_id_assigns_one() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/cinemas")
        .json(&json!({ "name": "pathe" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: CinemaResponse = response.json();
    assert!(!body.id.is_empty());

    let response = app.server.get(&format!("/cinemas/{}", body.id)).await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_create_cinema_missing_name() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/cinemas")
        .json(&json!({ "id": "1" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_cinema() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    factory.create_cinema("1", "gaumont").await;

    let response = app.server.get("/cinemas/1").await;

    response.assert_status(StatusCode::OK);
    let body: CinemaResponse = response.json();
    assert_eq!(body.id, "1");
    assert_eq!(body.name, "gaumont");
}

#[tokio::test]
async fn test_get_cinema_not_found() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    factory.create_cinema("1", "gaumont").await;

    let response = app.server.get("/cinemas/2").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "Not found");
    assert_eq!(body["details"].as_str().unwrap(), "Cinema");
}

#[tokio::test]
async fn test_update_cinema() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    factory.create_cinema("1", "gaumont").await;

    let response = app
        .server
        .put("/cinemas")
        .json(&json!({
            "id": "1",
            "name": "kinepolis"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: CinemaResponse = response.json();
    assert_eq!(body.name, "kinepolis");

    // Overwritten in place, not duplicated
    let response = app.server.get("/cinemas").await;
    let all: Vec<CinemaResponse> = response.json();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "kinepolis");
}

#[tokio::test]
async fn test_update_unknown_cinema_inserts() {
    let app = TestApp::new().await;

    let response = app
        .server
        .put("/cinemas")
        .json(&json!({
            "id": "never-seen",
            "name": "ugc"
        }))
        .await;

    response.assert_status(StatusCode::OK);

    let response = app.server.get("/cinemas/never-seen").await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_delete_cinema() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    factory.create_cinema("1", "kinepolis").await;

    let response = app
        .server
        .delete("/cinemas")
        .json(&json!({
            "id": "1",
            "name": "kinepolis"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: bool = response.json();
    assert!(body);

    let response = app.server.get("/cinemas/1").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_cinema_still_true() {
    let app = TestApp::new().await;

    let response = app
        .server
        .delete("/cinemas")
        .json(&json!({ "id": "404" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: bool = response.json();
    assert!(body);
}

#[tokio::test]
async fn test_cinema_lifecycle() {
    let app = TestApp::new().await;

    app.server
        .post("/cinemas")
        .json(&json!({ "id": "1", "name": "gaumont" }))
        .await
        .assert_status(StatusCode::OK);

    let body: CinemaResponse = app.server.get("/cinemas/1").await.json();
    assert_eq!(body.name, "gaumont");

    let body: CinemaResponse = app
        .server
        .put("/cinemas")
        .json(&json!({ "id": "1", "name": "kinepolis" }))
        .await
        .json();
    assert_eq!(body.name, "kinepolis");

    app.server
        .get("/cinemas/2")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let deleted: bool = app
        .server
        .delete("/cinemas")
        .json(&json!({ "id": "1", "name": "kinepolis" }))
        .await
        .json();
    assert!(deleted);
}
