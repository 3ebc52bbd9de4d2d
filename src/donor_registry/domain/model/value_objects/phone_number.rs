use crate::donor_registry::domain::model::enums::donor_registry_domain_error::DonorRegistryDomainError;

lazy_static::lazy_static! {
    static ref PHONE_NUMBER_REGEX: regex::Regex =
        regex::Regex::new("^[0-9]{10}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(value: String) -> Result<Self, DonorRegistryDomainError> {
        if !PHONE_NUMBER_REGEX.is_match(&value) {
            return Err(DonorRegistryDomainError::InvalidPhone);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
