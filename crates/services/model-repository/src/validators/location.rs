use domain::messages::INVALID_LOCATION;
use domain::{Envelope, LocationRequest};

use super::Validator;

/// Validates a standalone Location.
///
/// A location is balanced when it holds a complete pair of coordinates, or a
/// virtual location, or nothing at all. Mixing both, or giving a single
/// coordinate, is rejected.
pub struct LocationValidator;

impl LocationValidator {
    pub fn is_balanced(location: &LocationRequest) -> bool {
        let coordinates = location.geo_location.is_complete();
        let partial = location.geo_location.is_partial();
        let virtual_location = location.has_virtual_location();

        match (coordinates, virtual_location) {
            (true, false) => true,
            (false, _) => !partial,
            (true, true) => false,
        }
    }
}

impl Validator<LocationRequest> for LocationValidator {
    fn validate_attributes(&self, dto: &LocationRequest) -> Envelope<()> {
        if Self::is_balanced(dto) {
            Envelope::validated()
        } else {
            Envelope::error(INVALID_LOCATION)
        }
    }
}
