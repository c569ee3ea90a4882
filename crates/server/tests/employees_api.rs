use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use models::employee::{self, EmployeeInput};
use serde_json::{json, Value};
use service::employee::repository::{mock::MockEmployeeRepository, EmployeeRepository};
use service::errors::ServiceError;
use tower::ServiceExt;

use server::routes;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn build_app() -> Router {
    let state = routes::ServerState::new(Arc::new(MockEmployeeRepository::default()));
    routes::build_router(state, cors())
}

/// Repository whose store is unreachable.
struct FailingRepository;

fn refused() -> ServiceError { ServiceError::Db("connection refused".into()) }

#[async_trait::async_trait]
impl EmployeeRepository for FailingRepository {
    async fn list(&self) -> Result<Vec<employee::Model>, ServiceError> { Err(refused()) }
    async fn get(&self, _id: i32) -> Result<Option<employee::Model>, ServiceError> { Err(refused()) }
    async fn insert(&self, _input: EmployeeInput) -> Result<employee::Model, ServiceError> { Err(refused()) }
    async fn update(&self, _id: i32, _input: EmployeeInput) -> Result<Option<employee::Model>, ServiceError> {
        Err(refused())
    }
    async fn delete(&self, _id: i32) -> Result<bool, ServiceError> { Err(refused()) }
}

fn build_failing_app() -> Router {
    routes::build_router(routes::ServerState::new(Arc::new(FailingRepository)), cors())
}

fn ann() -> Value {
    json!({
        "firstName": "Ann",
        "lastName": "Lee",
        "email": "ann@x.com",
        "dateOfBirth": "1990-01-01",
        "position": "Engineer",
        "salary": 90000
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_list_empty() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = send(&app, "GET", "/api/employees", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_create_list_delete_scenario() -> anyhow::Result<()> {
    let app = build_app();

    let (status, created) = send(&app, "POST", "/api/employees", Some(ann())).await?;
    assert_eq!(status, StatusCode::OK);
    let mut expected = ann();
    expected["id"] = json!(1);
    expected["salary"] = json!(90000.0);
    assert_eq!(created, expected);

    let (_, list) = send(&app, "GET", "/api/employees", None).await?;
    assert_eq!(list, json!([expected]));

    let (status, deleted) = send(&app, "DELETE", "/api/employees/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!(true));

    let (_, list) = send(&app, "GET", "/api/employees", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_get_by_id() -> anyhow::Result<()> {
    let app = build_app();
    let (_, created) = send(&app, "POST", "/api/employees", Some(ann())).await?;

    let (status, found) = send(&app, "GET", "/api/employees/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);
    Ok(())
}

#[tokio::test]
async fn test_client_id_is_ignored_on_create() -> anyhow::Result<()> {
    let app = build_app();
    let mut body = ann();
    body["id"] = json!(999);
    let (status, created) = send(&app, "POST", "/api/employees", Some(body)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);

    let (_, missing) = send(&app, "GET", "/api/employees/999", None).await?;
    assert_eq!(missing, Value::Null);
    Ok(())
}

#[tokio::test]
async fn test_missing_records_are_success_coded() -> anyhow::Result<()> {
    let app = build_app();

    let (status, body) = send(&app, "GET", "/api/employees/42", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "PUT", "/api/employees/42", Some(ann())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "DELETE", "/api/employees/42", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(false));

    let (_, list) = send(&app, "GET", "/api/employees", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_update_overwrites_all_fields() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/api/employees", Some(ann())).await?;

    let next = json!({
        "firstName": "Anne",
        "lastName": "Leigh",
        "email": "anne@y.org",
        "dateOfBirth": "1991-02-03",
        "position": "Manager",
        "salary": 120000.5
    });
    let (status, updated) = send(&app, "PUT", "/api/employees/1", Some(next.clone())).await?;
    assert_eq!(status, StatusCode::OK);
    let mut expected = next;
    expected["id"] = json!(1);
    assert_eq!(updated, expected);

    let (_, reread) = send(&app, "GET", "/api/employees/1", None).await?;
    assert_eq!(reread, expected);
    Ok(())
}

#[tokio::test]
async fn test_openapi_document_served() -> anyhow::Result<()> {
    let app = build_app();
    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/employees/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn test_storage_failure_is_json_500() -> anyhow::Result<()> {
    let app = build_failing_app();
    let expected = json!({"error": "Database Error", "detail": "database error: connection refused"});

    for (method, uri, body) in [
        ("GET", "/api/employees", None),
        ("GET", "/api/employees/1", None),
        ("POST", "/api/employees", Some(ann())),
        ("PUT", "/api/employees/1", Some(ann())),
        ("DELETE", "/api/employees/1", None),
    ] {
        let (status, resp) = send(&app, method, uri, body).await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        assert_eq!(resp, expected, "{method} {uri}");
    }
    Ok(())
}
