use domain::{AssetCategoryRequest, Envelope};

use super::{mandatory_fields, verdict, Check, ParameterValidator, Validator};

/// Validates Asset Category requests and their parameter declarations.
pub struct AssetCategoryValidator;

impl AssetCategoryValidator {
    fn check(dto: &AssetCategoryRequest) -> Check {
        mandatory_fields(dto, &[])?;
        ParameterValidator::check_all(&dto.parameters)
    }
}

impl Validator<AssetCategoryRequest> for AssetCategoryValidator {
    fn validate_attributes(&self, dto: &AssetCategoryRequest) -> Envelope<()> {
        verdict(Self::check(dto))
    }
}
