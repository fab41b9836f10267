use domain::{Timestamps, Vendor, VendorRequest, VendorResponse};

use super::{assign_id, Converter};

#[derive(Debug, Clone, Copy, Default)]
pub struct VendorConverter;

impl Converter for VendorConverter {
    type Request = VendorRequest;
    type Entity = Vendor;
    type Response = VendorResponse;

    fn to_entity(&self, dto: &VendorRequest, existing_id: Option<&str>) -> Vendor {
        Vendor {
            id: assign_id(existing_id),
            name: dto.name.clone(),
            description: dto.description.clone(),
            timestamps: Timestamps::default(),
        }
    }

    fn to_dto(&self, entity: &Vendor) -> VendorResponse {
        VendorResponse {
            id: entity.id.clone(),
            name: entity.name.clone(),
            description: entity.description.clone(),
            creation_date: entity.timestamps.creation_date,
            latest_update_date: entity.timestamps.latest_update_date,
        }
    }
}
