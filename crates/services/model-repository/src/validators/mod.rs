//! Request validation.
//!
//! Every request DTO goes through two phases before it reaches storage:
//! attribute checks (mandatory fields, embedded object structure) and
//! relationship checks (references to other entities). Verdicts are
//! envelopes: SUCCESS on pass, ERROR for attribute problems, CONFLICT for
//! relationship problems.

mod asset_category;
mod location;
mod parameter;
mod system;
mod vendor;

pub use asset_category::AssetCategoryValidator;
pub use location::LocationValidator;
pub use parameter::{KvAttributeValidator, ParameterValidator, ParameterValueValidator};
pub use system::SystemValidator;
pub use vendor::VendorValidator;

use std::collections::BTreeSet;

use domain::messages::mandatory_fields_missing;
use domain::validation::failed_fields;
use domain::{Envelope, ResponseCode};
use validator::Validate;

/// Outcome of an intermediate check: `Err` carries the failure verdict.
pub(crate) type Check = Result<(), Envelope<()>>;

/// Two-phase validator for a request DTO.
pub trait Validator<T>: Send + Sync {
    /// Check the DTO's own fields.
    fn validate_attributes(&self, dto: &T) -> Envelope<()>;

    /// Check references to other entities. No entity references another yet.
    fn validate_relationships(&self, _dto: &T) -> Envelope<()> {
        Envelope::validated()
    }

    /// Attributes first; relationships only once attributes pass.
    fn validate(&self, dto: &T) -> Envelope<()> {
        let verdict = self.validate_attributes(dto);
        if verdict.code() != ResponseCode::Success {
            tracing::debug!("Attribute validation failed: {}", verdict.message());
            return verdict;
        }

        self.validate_relationships(dto)
    }
}

/// Collapse a check into a verdict envelope.
pub(crate) fn verdict(check: Check) -> Envelope<()> {
    match check {
        Ok(()) => Envelope::validated(),
        Err(failure) => failure,
    }
}

/// Mandatory field check driven by the DTO's `Validate` derive.
///
/// `extra` lists fields the derive cannot express (non-null JSON values...).
pub(crate) fn mandatory_fields<T: Validate>(dto: &T, extra: &[&str]) -> Check {
    let mut fields = match dto.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => failed_fields(&errors),
    };
    fields.extend(extra.iter().map(|field| field.to_string()));

    if fields.is_empty() {
        return Ok(());
    }

    fields.sort();
    fields.dedup();
    Err(Envelope::error(mandatory_fields_missing(&fields)))
}

/// Names occurring more than once, in sorted order.
pub(crate) fn duplicate_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            duplicates.insert(name.to_string());
        }
    }
    duplicates.into_iter().collect()
}
