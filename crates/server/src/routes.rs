use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::employee::{EmployeeRepository, EmployeeService, SeaOrmEmployeeRepository, SharedEmployeeService};

use crate::openapi::ApiDoc;

pub mod employees;

#[derive(Clone)]
pub struct ServerState {
    pub employees: SharedEmployeeService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees: Arc::new(EmployeeService::new(repo)) }
    }

    /// State backed by the SeaORM repository.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmEmployeeRepository { db }))
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, OpenAPI document and the employee API
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let employee_routes = Router::new()
        .route("/", get(employees::list).post(employees::create))
        .route(
            "/:id",
            get(employees::get).put(employees::update).delete(employees::delete),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api/employees", employee_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
