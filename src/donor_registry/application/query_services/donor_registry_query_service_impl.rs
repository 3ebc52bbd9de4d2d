use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::donor_registry::{
    domain::{
        model::{
            entities::donor_record::DonorRecord,
            enums::donor_registry_domain_error::DonorRegistryDomainError,
            queries::search_donors_query::SearchDonorsQuery,
        },
        services::donor_registry_query_service::DonorRegistryQueryService,
    },
    infrastructure::persistence::repositories::donor_record_repository::DonorRecordRepository,
};

pub struct DonorRegistryQueryServiceImpl {
    donor_repository: Arc<dyn DonorRecordRepository>,
}

impl DonorRegistryQueryServiceImpl {
    pub fn new(donor_repository: Arc<dyn DonorRecordRepository>) -> Self {
        Self { donor_repository }
    }
}

#[async_trait]
impl DonorRegistryQueryService for DonorRegistryQueryServiceImpl {
    async fn handle_search(
        &self,
        query: SearchDonorsQuery,
    ) -> Result<Vec<DonorRecord>, DonorRegistryDomainError> {
        let result = if query.is_unfiltered() {
            self.donor_repository.list_all().await
        } else {
            self.donor_repository.list_matching(&query).await
        };

        result.inspect_err(|e| error!(error = %e, "failed to search donor records"))
    }
}
