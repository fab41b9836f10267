use domain::{Envelope, VendorRequest};

use super::{mandatory_fields, verdict, Validator};

pub struct VendorValidator;

impl Validator<VendorRequest> for VendorValidator {
    fn validate_attributes(&self, dto: &VendorRequest) -> Envelope<()> {
        verdict(mandatory_fields(dto, &[]))
    }
}
