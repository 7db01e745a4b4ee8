//! Route registration for one catalog

use crate::contract::BankApi;
use crate::domain::Service;
use super::{dto::CatalogDialect, error::ErrorBody, handlers};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register the CRUD and self-query routes of catalog `D`
///
/// Each catalog gets its own sub-router so the `Extension` layers of the two
/// catalogs never overlap.
pub fn register_routes<D: CatalogDialect>(
    router: Router,
    service: Arc<Service>,
    self_query: Arc<dyn BankApi>,
) -> anyhow::Result<Router> {
    let catalog = D::CATALOG;
    anyhow::ensure!(
        service.catalog() == catalog && self_query.catalog() == catalog,
        "service/client catalog mismatch while registering {catalog} routes"
    );

    let base = catalog.base_path();
    let collection = base.to_string();
    let item = format!("{base}/{{id}}");
    let self_query_path = format!("{base}/{}", catalog.self_query_segment());

    let catalog_router = Router::new()
        .route(&collection, get(list_handler::<D>).post(create_handler::<D>))
        .route(
            &item,
            get(get_handler::<D>)
                .put(update_handler::<D>)
                .delete(delete_handler::<D>),
        )
        .route(&self_query_path, get(self_query_handler::<D>))
        .layer(Extension(service))
        .layer(Extension(self_query));

    tracing::info!(%catalog, base, "registered bank routes");
    Ok(router.merge(catalog_router))
}

// ===== Handler wrappers that extract dependencies from Extension =====

async fn list_handler<D: CatalogDialect>(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<D::Record>>, ErrorBody> {
    handlers::list_banks::<D>(service).await
}

async fn get_handler<D: CatalogDialect>(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<D::Record>, ErrorBody> {
    handlers::get_bank::<D>(service, path).await
}

async fn create_handler<D: CatalogDialect>(
    Extension(service): Extension<Arc<Service>>,
    body: Result<Json<D::Request>, JsonRejection>,
) -> Result<(StatusCode, Json<D::Record>), ErrorBody> {
    handlers::create_bank::<D>(service, body).await
}

async fn update_handler<D: CatalogDialect>(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<D::Request>, JsonRejection>,
) -> Result<Json<D::Record>, ErrorBody> {
    handlers::update_bank::<D>(service, path, body).await
}

async fn delete_handler<D: CatalogDialect>(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ErrorBody> {
    handlers::delete_bank::<D>(service, path).await
}

async fn self_query_handler<D: CatalogDialect>(
    Extension(client): Extension<Arc<dyn BankApi>>,
) -> Result<Json<Vec<D::Record>>, ErrorBody> {
    handlers::self_query::<D>(client).await
}
