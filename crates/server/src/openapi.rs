use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub version: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[schema(format = Date)]
    pub date_of_birth: String,
    pub position: String,
    pub salary: f64,
}

/// Create/update body; an `id` field is accepted and ignored.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInputDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[schema(format = Date)]
    pub date_of_birth: String,
    pub position: String,
    pub salary: f64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::list,
        crate::routes::employees::get,
        crate::routes::employees::create,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeDoc,
            EmployeeInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees")
    )
)]
pub struct ApiDoc;
