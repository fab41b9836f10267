//! Domain-level constants.

// =============================================================================
// Pagination
// =============================================================================

/// Page returned when the caller does not ask for one (0-based)
pub const DEFAULT_PAGE_NUMBER: u64 = 0;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound applied to any requested page size
pub const MAX_PAGE_SIZE: u64 = 100;

// =============================================================================
// Document store collections
// =============================================================================

pub const SYSTEM_COLLECTION: &str = "System";
pub const VENDOR_COLLECTION: &str = "Vendor";
pub const ASSET_CATEGORY_COLLECTION: &str = "AssetCategory";

/// Primary key attribute of every stored document
pub const DOCUMENT_ID_FIELD: &str = "_id";
