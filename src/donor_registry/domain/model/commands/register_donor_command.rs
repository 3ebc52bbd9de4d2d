use crate::donor_registry::domain::model::{
    entities::donor_record::DonorRecord,
    enums::{blood_group::BloodGroup, donor_registry_domain_error::DonorRegistryDomainError},
    value_objects::{
        city_name::CityName, donor_id::DonorId, donor_name::DonorName, phone_number::PhoneNumber,
    },
};

#[derive(Clone, Debug, Default)]
pub struct RegisterDonorCommandParts {
    pub name: Option<String>,
    pub blood_group: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegisterDonorCommand {
    name: DonorName,
    blood_group: BloodGroup,
    city: CityName,
    phone: PhoneNumber,
}

impl RegisterDonorCommand {
    pub fn new(parts: RegisterDonorCommandParts) -> Result<Self, DonorRegistryDomainError> {
        let name = DonorName::new(parts.name.unwrap_or_default())?;
        let city = CityName::new(parts.city.unwrap_or_default())?;
        let blood_group = parts
            .blood_group
            .as_deref()
            .ok_or(DonorRegistryDomainError::InvalidBloodGroup)?
            .parse::<BloodGroup>()?;
        let phone = PhoneNumber::new(parts.phone.ok_or(DonorRegistryDomainError::InvalidPhone)?)?;

        Ok(Self {
            name,
            blood_group,
            city,
            phone,
        })
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

    pub fn into_record(self, id: DonorId) -> DonorRecord {
        DonorRecord::restore(id, self.name, self.blood_group, self.city, self.phone)
    }
}
