use crate::donor_registry::domain::model::{
    enums::blood_group::BloodGroup,
    value_objects::{
        city_name::CityName, donor_id::DonorId, donor_name::DonorName, phone_number::PhoneNumber,
    },
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonorRecord {
    id: DonorId,
    name: DonorName,
    blood_group: BloodGroup,
    city: CityName,
    phone: PhoneNumber,
}

impl DonorRecord {
    pub fn restore(
        id: DonorId,
        name: DonorName,
        blood_group: BloodGroup,
        city: CityName,
        phone: PhoneNumber,
    ) -> Self {
        Self {
            id,
            name,
            blood_group,
            city,
            phone,
        }
    }

    pub fn id(&self) -> DonorId {
        self.id
    }

    pub fn name(&self) -> &DonorName {
        &self.name
    }

    pub fn blood_group(&self) -> BloodGroup {
        self.blood_group
    }

    pub fn city(&self) -> &CityName {
        &self.city
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }
}
