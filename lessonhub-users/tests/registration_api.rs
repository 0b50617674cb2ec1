use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use lessonhub::config::DatabaseConfig;
use lessonhub_users::api::{self, ApiState};
use lessonhub_users::infra::SqliteUserRepository;
use lessonhub_users::service::DefaultUserService;
use tower::ServiceExt;

async fn app() -> Router {
    let pool = lessonhub::db::connect(&DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
    })
    .await
    .expect("Failed to connect to sqlite");

    let repo = SqliteUserRepository::new(pool);
    repo.init_schema().await.expect("Failed to init schema");

    api::router(ApiState {
        users: Arc::new(DefaultUserService::new(Arc::new(repo))),
    })
}

fn post_users(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const JOHN_DOE: &str = r#"{"firstName":"John","lastName":"Doe","email":"john.doe@example.com"}"#;

#[tokio::test]
async fn test_register_then_conflict() {
    let app = app().await;

    let response = app.clone().oneshot(post_users(JOHN_DOE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["lastName"], "Doe");
    assert_eq!(body["email"], "john.doe@example.com");
    assert!(!body["id"].as_str().unwrap().is_empty());

    // Same body again: rejected with the friendly conflict message.
    let response = app.clone().oneshot(post_users(JOHN_DOE)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_string(response).await,
        "Email 'john.doe@example.com' already registered."
    );
}

#[tokio::test]
async fn test_register_missing_field() {
    let app = app().await;

    let response = app
        .oneshot(post_users(
            r#"{"lastName":"Doe","email":"x@example.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("mandaory fields missing"));
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = app().await;

    let response =
        app.oneshot(post_users("{not even json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("mandaory fields missing"));
}

#[tokio::test]
async fn test_register_ignores_extra_fields() {
    let app = app().await;

    let response = app
        .oneshot(post_users(
            r#"{"firstName":"John","lastName":"Doe","email":"john.doe@example.com","extraField":"extraValue"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["email"], "john.doe@example.com");
    // Extra input is neither stored nor echoed back.
    assert!(body.get("extraField").is_none());
}

#[tokio::test]
async fn test_list_users_after_inserts() {
    let app = app().await;

    for i in 0..3 {
        let body = format!(
            r#"{{"firstName":"First{i}","lastName":"Last{i}","email":"user{i}@example.com"}}"#
        );
        let response =
            app.clone().oneshot(post_users(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Vec<serde_json::Value> =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body.len(), 3);
    for i in 0..3 {
        assert!(
            body.iter()
                .any(|u| u["email"] == format!("user{i}@example.com"))
        );
    }
}
