//! OpenAPI component schemas for the bank REST API

use super::{dto::*, error::ErrorBody};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Bank Catalog API"),
    components(schemas(BankDto, BankRequest, BancoDto, BancoRequest, ErrorBody))
)]
pub struct ApiDoc;

/// Path the document is served under
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
