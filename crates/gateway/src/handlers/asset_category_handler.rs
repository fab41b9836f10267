//! Asset Category handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};

use common::AppResult;
use domain::envelope::AssetCategoryEnvelope;
use domain::AssetCategoryRequest;

use crate::extractors::{JsonBody, PageQuery};
use crate::handlers::reply;
use crate::state::AppState;

/// Create asset category routes
pub fn asset_category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/model_repository/v1/asset_management/assetCategory/",
            get(list_asset_categories).post(create_asset_category).delete(delete_all_asset_categories),
        )
        .route(
            "/model_repository/v1/asset_management/assetCategory/:key/id/",
            get(get_asset_category).put(update_asset_category).delete(delete_asset_category),
        )
        .route(
            "/model_repository/v1/asset_management/assetCategory/:key/name/",
            get(get_asset_category_by_name),
        )
}

/// Retrieve an Asset Category by database identifier
#[utoipa::path(
    get,
    path = "/model_repository/v1/asset_management/assetCategory/{id}/id/",
    tag = "Asset Category",
    params(
        ("id" = String, Path, description = "Asset Category database ID")
    ),
    responses(
        (status = 200, description = "Asset Category found", body = AssetCategoryEnvelope),
        (status = 400, description = "Blank identifier", body = AssetCategoryEnvelope),
        (status = 404, description = "No Asset Category with this ID", body = AssetCategoryEnvelope),
        (status = 500, description = "Storage failure", body = AssetCategoryEnvelope)
    )
)]
pub async fn get_asset_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let envelope = state.asset_categories.retrieve_by_id(&id).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Retrieve the oldest Asset Category carrying a name
#[utoipa::path(
    get,
    path = "/model_repository/v1/asset_management/assetCategory/{name}/name/",
    tag = "Asset Category",
    params(
        ("name" = String, Path, description = "Asset Category name")
    ),
    responses(
        (status = 200, description = "Asset Category found", body = AssetCategoryEnvelope),
        (status = 404, description = "No Asset Category with this name", body = AssetCategoryEnvelope),
        (status = 500, description = "Storage failure", body = AssetCategoryEnvelope)
    )
)]
pub async fn get_asset_category_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    let envelope = state.asset_categories.retrieve_by_name(&name).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// List Asset Categories, one page at a time
#[utoipa::path(
    get,
    path = "/model_repository/v1/asset_management/assetCategory/",
    tag = "Asset Category",
    params(domain::PageRequest),
    responses(
        (status = 200, description = "Page of Asset Categories", body = AssetCategoryEnvelope),
        (status = 400, description = "Invalid paging parameters", body = AssetCategoryEnvelope),
        (status = 404, description = "Empty collection or page beyond the last", body = AssetCategoryEnvelope)
    )
)]
pub async fn list_asset_categories(
    State(state): State<AppState>,
    PageQuery(paging): PageQuery,
) -> AppResult<Response> {
    let envelope = state.asset_categories.retrieve_all(paging.page, paging.size).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Create an Asset Category
#[utoipa::path(
    post,
    path = "/model_repository/v1/asset_management/assetCategory/",
    tag = "Asset Category",
    request_body = AssetCategoryRequest,
    responses(
        (status = 201, description = "Asset Category created", body = AssetCategoryEnvelope),
        (status = 400, description = "Malformed or incomplete request", body = AssetCategoryEnvelope),
        (status = 500, description = "Storage failure", body = AssetCategoryEnvelope)
    )
)]
pub async fn create_asset_category(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AssetCategoryRequest>,
) -> AppResult<Response> {
    let envelope = state.asset_categories.create(payload).await?;
    Ok(reply(envelope, StatusCode::CREATED))
}

/// Replace an existing Asset Category
#[utoipa::path(
    put,
    path = "/model_repository/v1/asset_management/assetCategory/{id}/id/",
    tag = "Asset Category",
    params(
        ("id" = String, Path, description = "Asset Category database ID")
    ),
    request_body = AssetCategoryRequest,
    responses(
        (status = 200, description = "Asset Category updated", body = AssetCategoryEnvelope),
        (status = 400, description = "Malformed or incomplete request", body = AssetCategoryEnvelope),
        (status = 404, description = "No Asset Category with this ID", body = AssetCategoryEnvelope)
    )
)]
pub async fn update_asset_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<AssetCategoryRequest>,
) -> AppResult<Response> {
    let envelope = state.asset_categories.update(payload, &id).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Delete an Asset Category
#[utoipa::path(
    delete,
    path = "/model_repository/v1/asset_management/assetCategory/{id}/id/",
    tag = "Asset Category",
    params(
        ("id" = String, Path, description = "Asset Category database ID")
    ),
    responses(
        (status = 200, description = "Asset Category deleted", body = AssetCategoryEnvelope),
        (status = 404, description = "No Asset Category with this ID", body = AssetCategoryEnvelope)
    )
)]
pub async fn delete_asset_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let envelope = state.asset_categories.delete(&id).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Delete every Asset Category
#[utoipa::path(
    delete,
    path = "/model_repository/v1/asset_management/assetCategory/",
    tag = "Asset Category",
    responses(
        (status = 200, description = "All Asset Categories deleted", body = AssetCategoryEnvelope),
        (status = 500, description = "Storage failure", body = AssetCategoryEnvelope)
    )
)]
pub async fn delete_all_asset_categories(State(state): State<AppState>) -> AppResult<Response> {
    let envelope = state.asset_categories.delete_all().await?;
    Ok(reply(envelope, StatusCode::OK))
}
