//! System handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};

use common::AppResult;
use domain::envelope::SystemEnvelope;
use domain::SystemRequest;

use crate::extractors::{JsonBody, PageQuery};
use crate::handlers::reply;
use crate::state::AppState;

/// Create system routes
pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/model_repository/v1/asset_management/system/",
            get(list_systems).post(create_system).delete(delete_all_systems),
        )
        .route(
            "/model_repository/v1/asset_management/system/:key/id/",
            get(get_system).put(update_system).delete(delete_system),
        )
        .route(
            "/model_repository/v1/asset_management/system/:key/name/",
            get(get_system_by_name),
        )
}

/// Retrieve a System by database identifier
#[utoipa::path(
    get,
    path = "/model_repository/v1/asset_management/system/{id}/id/",
    tag = "System",
    params(
        ("id" = String, Path, description = "System database ID")
    ),
    responses(
        (status = 200, description = "System found", body = SystemEnvelope),
        (status = 400, description = "Blank identifier", body = SystemEnvelope),
        (status = 404, description = "No System with this ID", body = SystemEnvelope),
        (status = 500, description = "Storage failure", body = SystemEnvelope)
    )
)]
pub async fn get_system(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let envelope = state.systems.retrieve_by_id(&id).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Retrieve the oldest System carrying a name
#[utoipa::path(
    get,
    path = "/model_repository/v1/asset_management/system/{name}/name/",
    tag = "System",
    params(
        ("name" = String, Path, description = "System name")
    ),
    responses(
        (status = 200, description = "System found", body = SystemEnvelope),
        (status = 404, description = "No System with this name", body = SystemEnvelope),
        (status = 500, description = "Storage failure", body = SystemEnvelope)
    )
)]
pub async fn get_system_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    let envelope = state.systems.retrieve_by_name(&name).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// List Systems, one page at a time
#[utoipa::path(
    get,
    path = "/model_repository/v1/asset_management/system/",
    tag = "System",
    params(domain::PageRequest),
    responses(
        (status = 200, description = "Page of Systems", body = SystemEnvelope),
        (status = 400, description = "Invalid paging parameters", body = SystemEnvelope),
        (status = 404, description = "Empty collection or page beyond the last", body = SystemEnvelope)
    )
)]
pub async fn list_systems(
    State(state): State<AppState>,
    PageQuery(paging): PageQuery,
) -> AppResult<Response> {
    let envelope = state.systems.retrieve_all(paging.page, paging.size).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Create a System
#[utoipa::path(
    post,
    path = "/model_repository/v1/asset_management/system/",
    tag = "System",
    request_body = SystemRequest,
    responses(
        (status = 201, description = "System created", body = SystemEnvelope),
        (status = 400, description = "Malformed or incomplete request", body = SystemEnvelope),
        (status = 500, description = "Storage failure", body = SystemEnvelope)
    )
)]
pub async fn create_system(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SystemRequest>,
) -> AppResult<Response> {
    let envelope = state.systems.create(payload).await?;
    Ok(reply(envelope, StatusCode::CREATED))
}

/// Replace an existing System
#[utoipa::path(
    put,
    path = "/model_repository/v1/asset_management/system/{id}/id/",
    tag = "System",
    params(
        ("id" = String, Path, description = "System database ID")
    ),
    request_body = SystemRequest,
    responses(
        (status = 200, description = "System updated", body = SystemEnvelope),
        (status = 400, description = "Malformed or incomplete request", body = SystemEnvelope),
        (status = 404, description = "No System with this ID", body = SystemEnvelope)
    )
)]
pub async fn update_system(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<SystemRequest>,
) -> AppResult<Response> {
    let envelope = state.systems.update(payload, &id).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Delete a System
#[utoipa::path(
    delete,
    path = "/model_repository/v1/asset_management/system/{id}/id/",
    tag = "System",
    params(
        ("id" = String, Path, description = "System database ID")
    ),
    responses(
        (status = 200, description = "System deleted", body = SystemEnvelope),
        (status = 404, description = "No System with this ID", body = SystemEnvelope)
    )
)]
pub async fn delete_system(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let envelope = state.systems.delete(&id).await?;
    Ok(reply(envelope, StatusCode::OK))
}

/// Delete every System
#[utoipa::path(
    delete,
    path = "/model_repository/v1/asset_management/system/",
    tag = "System",
    responses(
        (status = 200, description = "All Systems deleted", body = SystemEnvelope),
        (status = 500, description = "Storage failure", body = SystemEnvelope)
    )
)]
pub async fn delete_all_systems(State(state): State<AppState>) -> AppResult<Response> {
    let envelope = state.systems.delete_all().await?;
    Ok(reply(envelope, StatusCode::OK))
}
