use std::fmt;

use crate::donor_registry::domain::model::enums::donor_registry_domain_error::DonorRegistryDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DonorId(i64);

impl DonorId {
    pub fn new(value: i64) -> Result<Self, DonorRegistryDomainError> {
        if value <= 0 {
            return Err(DonorRegistryDomainError::InvalidDonorId);
        }
        Ok(Self(value))
    }

    pub fn parse(value: &str) -> Result<Self, DonorRegistryDomainError> {
        let parsed = value
            .trim()
            .parse::<i64>()
            .map_err(|_| DonorRegistryDomainError::InvalidDonorId)?;
        Self::new(parsed)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
