//! Vendor handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};

use common::AppResult;
use domain::envelope::VendorEnvelope;
use domain::VendorRequest;

use crate::extractors::{JsonBody, PageQuery};
use crate::handlers::reply;
use crate::state::AppState;

/// Create vendor routes
pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/model_repository/v1/asset_management/vendor/",
            get(list_vendors).post(create_vendor).delete(delete_all_vendors),
        )
        .route(
            "/model_repository/v1/asset_management/vendor/:key/id/",
            get(get_vendor).put(update_vendor).delete(delete_vendor),
        )
        .route(
            "/model_repository/v1/asset_management/vendor/:key/name/",
            get(get_vendor_by_name),
        )
}

/// Retrieve a Vendor by database identifier
#[utoipa::path(
    get,
    path = "/model_repository/v1/asset_management/vendor/{id}/id/",
    tag = "Vendor",
    params(
        ("id" = String, Path, description = "Vendor database ID")
    ),
    responses(
        (status = 200, description = "Vendor found", body = VendorEnvelope),
        (status = 400, description = "Blank identifier", body = VendorEnvelope),
        (status = 404, description = "No Vendor with this ID", body = VendorEnvelope),
        (status = 500, description = "Storage failure", body = VendorEnvelope)
    )
)]
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let envelope = state.vendors.retrieve_by_id(&id).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Retrieve the oldest Vendor carrying a name
#[utoipa::path(
    get,
    path = "/model_repository/v1/asset_management/vendor/{name}/name/",
    tag = "Vendor",
    params(
        ("name" = String, Path, description = "Vendor name")
    ),
    responses(
        (status = 200, description = "Vendor found", body = VendorEnvelope),
        (status = 404, description = "No Vendor with this name", body = VendorEnvelope),
        (status = 500, description = "Storage failure", body = VendorEnvelope)
    )
)]
pub async fn get_vendor_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    let envelope = state.vendors.retrieve_by_name(&name).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// List Vendors, one page at a time
#[utoipa::path(
    get,
    path = "/model_repository/v1/asset_management/vendor/",
    tag = "Vendor",
    params(domain::PageRequest),
    responses(
        (status = 200, description = "Page of Vendors", body = VendorEnvelope),
        (status = 400, description = "Invalid paging parameters", body = VendorEnvelope),
        (status = 404, description = "Empty collection or page beyond the last", body = VendorEnvelope)
    )
)]
pub async fn list_vendors(
    State(state): State<AppState>,
    PageQuery(paging): PageQuery,
) -> AppResult<Response> {
    let envelope = state.vendors.retrieve_all(paging.page, paging.size).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Create a Vendor
#[utoipa::path(
    post,
    path = "/model_repository/v1/asset_management/vendor/",
    tag = "Vendor",
    request_body = VendorRequest,
    responses(
        (status = 201, description = "Vendor created", body = VendorEnvelope),
        (status = 400, description = "Malformed or incomplete request", body = VendorEnvelope),
        (status = 500, description = "Storage failure", body = VendorEnvelope)
    )
)]
pub async fn create_vendor(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<VendorRequest>,
) -> AppResult<Response> {
    let envelope = state.vendors.create(payload).await?;
    Ok(reply(envelope, StatusCode::CREATED))
}

/// Replace an existing Vendor
#[utoipa::path(
    put,
    path = "/model_repository/v1/asset_management/vendor/{id}/id/",
    tag = "Vendor",
    params(
        ("id" = String, Path, description = "Vendor database ID")
    ),
    request_body = VendorRequest,
    responses(
        (status = 200, description = "Vendor updated", body = VendorEnvelope),
        (status = 400, description = "Malformed or incomplete request", body = VendorEnvelope),
        (status = 404, description = "No Vendor with this ID", body = VendorEnvelope)
    )
)]
pub async fn update_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<VendorRequest>,
) -> AppResult<Response> {
    let envelope = state.vendors.update(payload, &id).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Delete a Vendor
#[utoipa::path(
    delete,
    path = "/model_repository/v1/asset_management/vendor/{id}/id/",
    tag = "Vendor",
    params(
        ("id" = String, Path, description = "Vendor database ID")
    ),
    responses(
        (status = 200, description = "Vendor deleted", body = VendorEnvelope),
        (status = 404, description = "No Vendor with this ID", body = VendorEnvelope)
    )
)]
pub async fn delete_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let envelope = state.vendors.delete(&id).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Delete every Vendor
#[utoipa::path(
    delete,
    path = "/model_repository/v1/asset_management/vendor/",
    tag = "Vendor",
    responses(
        (status = 200, description = "All Vendors deleted", body = VendorEnvelope),
        (status = 500, description = "Storage failure", body = VendorEnvelope)
    )
)]
pub async fn delete_all_vendors(State(state): State<AppState>) -> AppResult<Response> {
    let envelope = state.vendors.delete_all().await?;
    Ok(reply(envelope, StatusCode::OK))
}
