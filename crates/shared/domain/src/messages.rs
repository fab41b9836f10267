//! Message catalogue used in envelopes and logs.
//!
//! Entity specific messages are built from an [`EntityKind`] so the three
//! entity types share one wording.

use crate::record::EntityKind;

pub const SUCCESS: &str = "Database transaction successfully concluded.";
pub const VALIDATION_SUCCESS: &str = "Validation success.";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error.";
pub const INVALID_PARAMETERS: &str = "Operation aborted due to invalid input parameters.";
pub const MANDATORY_FIELDS_MISSING: &str =
    "Request contains one or more mandatory fields that are null. Operation aborted.";
pub const HTTP_MESSAGE_NOT_READABLE: &str = "JSON Parse Error occurred. Operation aborted.";

pub const INVALID_LOCATION_STRUCTURE: &str =
    "A System may be provided either with a pair of coordinates or a virtual location.";
pub const INVALID_LOCATION: &str =
    "Either a GeoLocation (pair of coordinates) or a VirtualLocation must be provided.";
pub const DUPLICATE_PARAMETER: &str = "There is already a Parameter with the same name.";
pub const DUPLICATE_PARAMETER_VALUE: &str = "Parameter Values sharing the same name detected:";

/// `"... Field(s): [name, type]"`
pub fn mandatory_fields_missing(fields: &[String]) -> String {
    format!("{} Field(s): [{}]", MANDATORY_FIELDS_MISSING, fields.join(", "))
}

pub fn not_found_id(kind: EntityKind, id: &str) -> String {
    format!(
        "Failed to retrieve any {} entities from the database with ID: '{}'.",
        kind.label(),
        id
    )
}

pub fn not_found_name(kind: EntityKind, name: &str) -> String {
    format!(
        "Failed to retrieve any {} entities from the database with Name: '{}'.",
        kind.label(),
        name
    )
}

pub fn no_entities_found(kind: EntityKind) -> String {
    format!(
        "Failed to retrieve any {} entities from the database.",
        kind.label()
    )
}

pub fn exceeded_page_limit(kind: EntityKind, total_pages: u64) -> String {
    format!(
        "Failed to retrieve any {} entities because page limit has been exceeded. Total Pages: {}",
        kind.label(),
        total_pages
    )
}

pub fn error_on_retrieval_id(kind: EntityKind, id: &str) -> String {
    format!(
        "Error detected while attempting to retrieve {} with ID: '{}'.",
        kind.label(),
        id
    )
}

pub fn error_on_retrieval_name(kind: EntityKind, name: &str) -> String {
    format!(
        "Error detected while attempting to retrieve {} with Name: '{}'.",
        kind.label(),
        name
    )
}

pub fn error_on_retrieval_many(kind: EntityKind) -> String {
    format!(
        "Error detected while attempting to retrieve collection of {}.",
        kind.plural()
    )
}

pub fn error_on_creation(kind: EntityKind, name: &str) -> String {
    format!(
        "Error detected while attempting to create {} with Name: '{}'.",
        kind.label(),
        name
    )
}

pub fn error_on_update(kind: EntityKind, id: &str) -> String {
    format!(
        "Error detected while attempting to update {} with ID: '{}'.",
        kind.label(),
        id
    )
}

pub fn error_on_deletion_id(kind: EntityKind, id: &str) -> String {
    format!(
        "Error detected while attempting to delete {} with ID: '{}'.",
        kind.label(),
        id
    )
}

pub fn error_on_deletion_many(kind: EntityKind) -> String {
    format!(
        "Error detected while attempting to delete collection of {}.",
        kind.plural()
    )
}

pub fn deleted(kind: EntityKind, id: &str) -> String {
    format!("{} with ID: '{}' has been deleted.", kind.label(), id)
}

pub fn deleted_all(kind: EntityKind, count: u64) -> String {
    format!("{} {} have been deleted.", count, kind.plural())
}

pub fn duplicate_parameter_value(names: &[String]) -> String {
    format!("{} [{}]", DUPLICATE_PARAMETER_VALUE, names.join(", "))
}
