//! HTTP request handlers - thin layer that delegates to domain service

use crate::contract::BankApi;
use crate::domain::{validation, Service};
use super::{
    dto::CatalogDialect,
    error::{map_domain_error, map_json_rejection, map_path_rejection, ErrorBody},
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

type IdPath = Result<Path<i64>, PathRejection>;
type Body<D> = Result<Json<<D as CatalogDialect>::Request>, JsonRejection>;

fn id_from<D: CatalogDialect>(path: IdPath) -> Result<i64, ErrorBody> {
    path.map(|Path(id)| id)
        .map_err(|rejection| map_path_rejection(D::CATALOG, rejection))
}

/// Parse and validate a request body into service input
fn input_from<D: CatalogDialect>(
    body: Body<D>,
) -> Result<crate::contract::BankInput, ErrorBody> {
    let Json(req) = body.map_err(|rejection| map_json_rejection(D::CATALOG, rejection))?;
    validation::into_input(D::CATALOG, req.into())
        .map_err(|e| map_domain_error(D::CATALOG, e))
}

/// List banks
pub async fn list_banks<D: CatalogDialect>(
    service: Arc<Service>,
) -> Result<Json<Vec<D::Record>>, ErrorBody> {
    let banks = service
        .list_banks()
        .await
        .map_err(|e| map_domain_error(D::CATALOG, e))?;

    Ok(Json(banks.into_iter().map(Into::into).collect()))
}

/// Get a specific bank
pub async fn get_bank<D: CatalogDialect>(
    service: Arc<Service>,
    path: IdPath,
) -> Result<Json<D::Record>, ErrorBody> {
    let id = id_from::<D>(path)?;
    let bank = service
        .get_bank(id)
        .await
        .map_err(|e| map_domain_error(D::CATALOG, e))?;

    Ok(Json(bank.into()))
}

/// Create a bank
pub async fn create_bank<D: CatalogDialect>(
    service: Arc<Service>,
    body: Body<D>,
) -> Result<(StatusCode, Json<D::Record>), ErrorBody> {
    let input = input_from::<D>(body)?;
    let bank = service
        .create_bank(input)
        .await
        .map_err(|e| map_domain_error(D::CATALOG, e))?;

    Ok((StatusCode::CREATED, Json(bank.into())))
}

/// Update an existing bank
pub async fn update_bank<D: CatalogDialect>(
    service: Arc<Service>,
    path: IdPath,
    body: Body<D>,
) -> Result<Json<D::Record>, ErrorBody> {
    let id = id_from::<D>(path)?;
    let input = input_from::<D>(body)?;
    let bank = service
        .update_bank(id, input)
        .await
        .map_err(|e| map_domain_error(D::CATALOG, e))?;

    Ok(Json(bank.into()))
}

/// Delete a bank
pub async fn delete_bank<D: CatalogDialect>(
    service: Arc<Service>,
    path: IdPath,
) -> Result<StatusCode, ErrorBody> {
    let id = id_from::<D>(path)?;
    service
        .delete_bank(id)
        .await
        .map_err(|e| map_domain_error(D::CATALOG, e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Relay the catalog listing through its configured client
pub async fn self_query<D: CatalogDialect>(
    client: Arc<dyn BankApi>,
) -> Result<Json<Vec<D::Record>>, ErrorBody> {
    let banks = client
        .list_banks()
        .await
        .map_err(|e| map_domain_error(D::CATALOG, e))?;

    Ok(Json(banks.into_iter().map(Into::into).collect()))
}
