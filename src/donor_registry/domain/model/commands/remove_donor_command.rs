use crate::donor_registry::domain::model::{
    enums::donor_registry_domain_error::DonorRegistryDomainError,
    value_objects::donor_id::DonorId,
};

#[derive(Clone, Debug)]
pub struct RemoveDonorCommand {
    donor_id: DonorId,
}

impl RemoveDonorCommand {
    pub fn new(donor_id: String) -> Result<Self, DonorRegistryDomainError> {
        Ok(Self {
            donor_id: DonorId::parse(&donor_id)?,
        })
    }

    pub fn donor_id(&self) -> DonorId {
        self.donor_id
    }
}
