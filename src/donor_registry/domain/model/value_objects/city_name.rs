use crate::donor_registry::domain::model::enums::donor_registry_domain_error::DonorRegistryDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CityName(String);

impl CityName {
    pub fn new(value: String) -> Result<Self, DonorRegistryDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DonorRegistryDomainError::MissingCity);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
