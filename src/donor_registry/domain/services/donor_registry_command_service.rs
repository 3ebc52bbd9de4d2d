use async_trait::async_trait;

use crate::donor_registry::domain::model::{
    commands::{
        register_donor_command::RegisterDonorCommandParts,
        remove_donor_command::RemoveDonorCommand,
    },
    entities::donor_record::DonorRecord,
    enums::{
        donor_registry_domain_error::DonorRegistryDomainError,
        donor_removal_outcome::DonorRemovalOutcome,
    },
};

#[async_trait]
pub trait DonorRegistryCommandService: Send + Sync {
    async fn handle_register(
        &self,
        payload: RegisterDonorCommandParts,
    ) -> Result<DonorRecord, DonorRegistryDomainError>;

    async fn handle_remove(
        &self,
        command: RemoveDonorCommand,
    ) -> Result<DonorRemovalOutcome, DonorRegistryDomainError>;
}
