use async_trait::async_trait;

use crate::donor_registry::domain::model::{
    commands::register_donor_command::RegisterDonorCommand,
    entities::donor_record::DonorRecord,
    enums::donor_registry_domain_error::DonorRegistryDomainError,
    queries::search_donors_query::SearchDonorsQuery,
    value_objects::donor_id::DonorId,
};

/// Storage port for donor records.
///
/// Implementations assign the id inside `insert`, atomically with the write,
/// and never hand out the same id twice. Listings are in id order.
#[async_trait]
pub trait DonorRecordRepository: Send + Sync {
    async fn insert(
        &self,
        command: RegisterDonorCommand,
    ) -> Result<DonorRecord, DonorRegistryDomainError>;

    async fn list_all(&self) -> Result<Vec<DonorRecord>, DonorRegistryDomainError>;

    async fn list_matching(
        &self,
        query: &SearchDonorsQuery,
    ) -> Result<Vec<DonorRecord>, DonorRegistryDomainError>;

    /// Returns whether a record was actually deleted.
    async fn delete_by_id(&self, donor_id: DonorId) -> Result<bool, DonorRegistryDomainError>;
}
