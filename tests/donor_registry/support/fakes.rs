use std::sync::Mutex;

use async_trait::async_trait;
use blood_donor_directory::donor_registry::{
    domain::model::{
        commands::register_donor_command::RegisterDonorCommand,
        entities::donor_record::DonorRecord,
        enums::donor_registry_domain_error::DonorRegistryDomainError,
        queries::search_donors_query::SearchDonorsQuery,
        value_objects::donor_id::DonorId,
    },
    infrastructure::persistence::repositories::{
        donor_record_repository::DonorRecordRepository,
        in_memory::in_memory_donor_record_repository_impl::InMemoryDonorRecordRepositoryImpl,
    },
};

#[derive(Default)]
struct SpyState {
    insert_calls: usize,
    list_all_calls: usize,
    list_matching_calls: usize,
    delete_calls: usize,
}

/// In-memory store that also records which repository operations ran.
pub struct SpyDonorRecordRepository {
    inner: InMemoryDonorRecordRepositoryImpl,
    state: Mutex<SpyState>,
}

impl SpyDonorRecordRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemoryDonorRecordRepositoryImpl::new(),
            state: Mutex::new(SpyState::default()),
        }
    }

    /// (insert, list_all, list_matching, delete)
    pub fn stats(&self) -> (usize, usize, usize, usize) {
        let state = self.state.lock().expect("mutex poisoned");
        (
            state.insert_calls,
            state.list_all_calls,
            state.list_matching_calls,
            state.delete_calls,
        )
    }
}

#[async_trait]
impl DonorRecordRepository for SpyDonorRecordRepository {
    async fn insert(
        &self,
        command: RegisterDonorCommand,
    ) -> Result<DonorRecord, DonorRegistryDomainError> {
        self.state.lock().expect("mutex poisoned").insert_calls += 1;
        self.inner.insert(command).await
    }

    async fn list_all(&self) -> Result<Vec<DonorRecord>, DonorRegistryDomainError> {
        self.state.lock().expect("mutex poisoned").list_all_calls += 1;
        self.inner.list_all().await
    }

    async fn list_matching(
        &self,
        query: &SearchDonorsQuery,
    ) -> Result<Vec<DonorRecord>, DonorRegistryDomainError> {
        self.state.lock().expect("mutex poisoned").list_matching_calls += 1;
        self.inner.list_matching(query).await
    }

    async fn delete_by_id(&self, donor_id: DonorId) -> Result<bool, DonorRegistryDomainError> {
        self.state.lock().expect("mutex poisoned").delete_calls += 1;
        self.inner.delete_by_id(donor_id).await
    }
}

/// Store that is never reachable.
pub struct FailingDonorRecordRepository;

fn unreachable_store() -> DonorRegistryDomainError {
    DonorRegistryDomainError::InfrastructureError("store unreachable".to_string())
}

#[async_trait]
impl DonorRecordRepository for FailingDonorRecordRepository {
    async fn insert(
        &self,
        _command: RegisterDonorCommand,
    ) -> Result<DonorRecord, DonorRegistryDomainError> {
        Err(unreachable_store())
    }

    async fn list_all(&self) -> Result<Vec<DonorRecord>, DonorRegistryDomainError> {
        Err(unreachable_store())
    }

    async fn list_matching(
        &self,
        _query: &SearchDonorsQuery,
    ) -> Result<Vec<DonorRecord>, DonorRegistryDomainError> {
        Err(unreachable_store())
    }

    async fn delete_by_id(&self, _donor_id: DonorId) -> Result<bool, DonorRegistryDomainError> {
        Err(unreachable_store())
    }
}
