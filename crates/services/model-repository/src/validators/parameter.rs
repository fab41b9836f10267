use domain::messages::{duplicate_parameter_value, DUPLICATE_PARAMETER};
use domain::{Envelope, KvAttributeRequest, ParameterRequest, ParameterValueRequest};

use super::{duplicate_names, mandatory_fields, verdict, Check, Validator};

/// A Parameter Value needs a name and a non-null value.
pub struct ParameterValueValidator;

impl ParameterValueValidator {
    pub(crate) fn check(dto: &ParameterValueRequest) -> Check {
        let extra: &[&str] = if dto.value.is_null() { &["value"] } else { &[] };
        mandatory_fields(dto, extra)
    }
}

impl Validator<ParameterValueRequest> for ParameterValueValidator {
    fn validate_attributes(&self, dto: &ParameterValueRequest) -> Envelope<()> {
        verdict(Self::check(dto))
    }
}

/// A Key/Value attribute needs a name and valid, uniquely named values.
pub struct KvAttributeValidator;

impl KvAttributeValidator {
    pub(crate) fn check(dto: &KvAttributeRequest) -> Check {
        mandatory_fields(dto, &[])?;

        for value in &dto.parameter_values {
            ParameterValueValidator::check(value)?;
        }

        let duplicates = duplicate_names(dto.parameter_values.iter().map(|v| v.name.as_str()));
        if !duplicates.is_empty() {
            return Err(Envelope::error(duplicate_parameter_value(&duplicates)));
        }

        Ok(())
    }
}

impl Validator<KvAttributeRequest> for KvAttributeValidator {
    fn validate_attributes(&self, dto: &KvAttributeRequest) -> Envelope<()> {
        verdict(Self::check(dto))
    }
}

/// A Parameter declaration needs a name and a data type.
pub struct ParameterValidator;

impl ParameterValidator {
    pub(crate) fn check(dto: &ParameterRequest) -> Check {
        let extra: &[&str] = if dto.data_type.trim().is_empty() {
            &["type"]
        } else {
            &[]
        };
        mandatory_fields(dto, extra)
    }

    /// Parameter names must be unique inside one owner.
    pub(crate) fn check_all(parameters: &[ParameterRequest]) -> Check {
        for parameter in parameters {
            Self::check(parameter)?;
        }

        if !duplicate_names(parameters.iter().map(|p| p.name.as_str())).is_empty() {
            return Err(Envelope::error(DUPLICATE_PARAMETER));
        }

        Ok(())
    }
}

impl Validator<ParameterRequest> for ParameterValidator {
    fn validate_attributes(&self, dto: &ParameterRequest) -> Envelope<()> {
        verdict(Self::check(dto))
    }
}
