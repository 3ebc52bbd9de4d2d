use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::donor_registry::{
    domain::{
        model::{
            commands::{
                register_donor_command::{RegisterDonorCommand, RegisterDonorCommandParts},
                remove_donor_command::RemoveDonorCommand,
            },
            entities::donor_record::DonorRecord,
            enums::{
                donor_registry_domain_error::DonorRegistryDomainError,
                donor_removal_outcome::DonorRemovalOutcome,
            },
        },
        services::donor_registry_command_service::DonorRegistryCommandService,
    },
    infrastructure::persistence::repositories::donor_record_repository::DonorRecordRepository,
};

pub struct DonorRegistryCommandServiceImpl {
    donor_repository: Arc<dyn DonorRecordRepository>,
}

impl DonorRegistryCommandServiceImpl {
    pub fn new(donor_repository: Arc<dyn DonorRecordRepository>) -> Self {
        Self { donor_repository }
    }
}

#[async_trait]
impl DonorRegistryCommandService for DonorRegistryCommandServiceImpl {
    async fn handle_register(
        &self,
        payload: RegisterDonorCommandParts,
    ) -> Result<DonorRecord, DonorRegistryDomainError> {
        let command = match RegisterDonorCommand::new(payload) {
            Ok(command) => command,
            Err(rejection) => {
                debug!(reason = rejection.code(), "donor registration rejected");
                return Err(rejection);
            }
        };

        let record = self
            .donor_repository
            .insert(command)
            .await
            .inspect_err(|e| error!(error = %e, "failed to store donor record"))?;

        info!(
            donor_id = %record.id(),
            blood_group = %record.blood_group(),
            city = record.city().value(),
            "donor registered"
        );

        Ok(record)
    }

    async fn handle_remove(
        &self,
        command: RemoveDonorCommand,
    ) -> Result<DonorRemovalOutcome, DonorRegistryDomainError> {
        let removed = self
            .donor_repository
            .delete_by_id(command.donor_id())
            .await
            .inspect_err(|e| {
                error!(donor_id = %command.donor_id(), error = %e, "failed to remove donor record")
            })?;

        let outcome = DonorRemovalOutcome::from_removed(removed);
        match outcome {
            DonorRemovalOutcome::Removed => {
                info!(donor_id = %command.donor_id(), "donor removed")
            }
            DonorRemovalOutcome::NotFound => {
                debug!(donor_id = %command.donor_id(), "no donor stored under id")
            }
        }

        Ok(outcome)
    }
}
