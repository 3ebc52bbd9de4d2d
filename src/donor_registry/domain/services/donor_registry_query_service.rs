use async_trait::async_trait;

use crate::donor_registry::domain::model::{
    entities::donor_record::DonorRecord,
    enums::donor_registry_domain_error::DonorRegistryDomainError,
    queries::search_donors_query::SearchDonorsQuery,
};

#[async_trait]
pub trait DonorRegistryQueryService: Send + Sync {
    async fn handle_search(
        &self,
        query: SearchDonorsQuery,
    ) -> Result<Vec<DonorRecord>, DonorRegistryDomainError>;
}
