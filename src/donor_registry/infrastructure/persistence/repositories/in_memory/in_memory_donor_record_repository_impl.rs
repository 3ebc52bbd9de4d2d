use std::{
    collections::BTreeMap,
    sync::{PoisonError, RwLock},
};

use async_trait::async_trait;

use crate::donor_registry::{
    domain::model::{
        commands::register_donor_command::RegisterDonorCommand,
        entities::donor_record::DonorRecord,
        enums::donor_registry_domain_error::DonorRegistryDomainError,
        queries::search_donors_query::SearchDonorsQuery,
        value_objects::donor_id::DonorId,
    },
    infrastructure::persistence::repositories::donor_record_repository::DonorRecordRepository,
};

struct InMemoryDonorStoreState {
    records: BTreeMap<DonorId, DonorRecord>,
    next_id: i64,
}

pub struct InMemoryDonorRecordRepositoryImpl {
    state: RwLock<InMemoryDonorStoreState>,
}

impl InMemoryDonorRecordRepositoryImpl {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(InMemoryDonorStoreState {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryDonorRecordRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DonorRecordRepository for InMemoryDonorRecordRepositoryImpl {
    async fn insert(
        &self,
        command: RegisterDonorCommand,
    ) -> Result<DonorRecord, DonorRegistryDomainError> {
        let mut state = self.state.write().map_err(map_poison_error)?;

        let donor_id = DonorId::new(state.next_id)?;
        state.next_id = state.next_id.checked_add(1).ok_or_else(|| {
            DonorRegistryDomainError::InfrastructureError("donor id space exhausted".to_string())
        })?;

        let record = command.into_record(donor_id);
        state.records.insert(donor_id, record.clone());

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<DonorRecord>, DonorRegistryDomainError> {
        let state = self.state.read().map_err(map_poison_error)?;
        Ok(state.records.values().cloned().collect())
    }

    async fn list_matching(
        &self,
        query: &SearchDonorsQuery,
    ) -> Result<Vec<DonorRecord>, DonorRegistryDomainError> {
        let state = self.state.read().map_err(map_poison_error)?;
        Ok(state
            .records
            .values()
            .filter(|record| query.matches(record))
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, donor_id: DonorId) -> Result<bool, DonorRegistryDomainError> {
        let mut state = self.state.write().map_err(map_poison_error)?;
        Ok(state.records.remove(&donor_id).is_some())
    }
}

fn map_poison_error<T>(_: PoisonError<T>) -> DonorRegistryDomainError {
    DonorRegistryDomainError::InfrastructureError("donor store lock poisoned".to_string())
}
