//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::{HealthResponse, StorageStatus};
use domain::envelope::{AssetCategoryEnvelope, SystemEnvelope, VendorEnvelope};
use domain::{
    AssetCategoryRequest, AssetCategoryResponse, GeoLocation, KvAttributeRequest,
    KvAttributeResponse, LocationRequest, LocationResponse, PaginationInfo, ParameterRequest,
    ParameterResponse, ParameterValueRequest, ParameterValueResponse, ResponseCode,
    SystemRequest, SystemResponse, VendorRequest, VendorResponse,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Model Repository",
        description = "CRUD for IoT Systems, Vendors and Asset Categories"
    ),
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::system_handler::get_system,
        crate::handlers::system_handler::get_system_by_name,
        crate::handlers::system_handler::list_systems,
        crate::handlers::system_handler::create_system,
        crate::handlers::system_handler::update_system,
        crate::handlers::system_handler::delete_system,
        crate::handlers::system_handler::delete_all_systems,
        crate::handlers::vendor_handler::get_vendor,
        crate::handlers::vendor_handler::get_vendor_by_name,
        crate::handlers::vendor_handler::list_vendors,
        crate::handlers::vendor_handler::create_vendor,
        crate::handlers::vendor_handler::update_vendor,
        crate::handlers::vendor_handler::delete_vendor,
        crate::handlers::vendor_handler::delete_all_vendors,
        crate::handlers::asset_category_handler::get_asset_category,
        crate::handlers::asset_category_handler::get_asset_category_by_name,
        crate::handlers::asset_category_handler::list_asset_categories,
        crate::handlers::asset_category_handler::create_asset_category,
        crate::handlers::asset_category_handler::update_asset_category,
        crate::handlers::asset_category_handler::delete_asset_category,
        crate::handlers::asset_category_handler::delete_all_asset_categories,
    ),
    components(
        schemas(
            ResponseCode,
            PaginationInfo,
            SystemEnvelope,
            VendorEnvelope,
            AssetCategoryEnvelope,
            SystemRequest,
            SystemResponse,
            VendorRequest,
            VendorResponse,
            AssetCategoryRequest,
            AssetCategoryResponse,
            LocationRequest,
            LocationResponse,
            GeoLocation,
            ParameterRequest,
            ParameterResponse,
            ParameterValueRequest,
            ParameterValueResponse,
            KvAttributeRequest,
            KvAttributeResponse,
            HealthResponse,
            StorageStatus,
        )
    ),
    tags(
        (name = "System", description = "IoT installations"),
        (name = "Vendor", description = "Equipment vendors"),
        (name = "Asset Category", description = "Device categories and their parameters"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
