use domain::messages::INVALID_LOCATION_STRUCTURE;
use domain::{Envelope, SystemRequest};

use super::{mandatory_fields, verdict, Check, KvAttributeValidator, LocationValidator, Validator};

/// Validates System requests: mandatory name, balanced location, valid attributes.
pub struct SystemValidator;

impl SystemValidator {
    fn check(dto: &SystemRequest) -> Check {
        mandatory_fields(dto, &[])?;

        if let Some(location) = &dto.location {
            if !LocationValidator::is_balanced(location) {
                return Err(Envelope::error(INVALID_LOCATION_STRUCTURE));
            }
        }

        for attribute in &dto.attributes {
            KvAttributeValidator::check(attribute)?;
        }

        Ok(())
    }
}

impl Validator<SystemRequest> for SystemValidator {
    fn validate_attributes(&self, dto: &SystemRequest) -> Envelope<()> {
        verdict(Self::check(dto))
    }
}
