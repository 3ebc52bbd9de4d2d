use std::sync::Arc;

use axum::Router;
use sqlx::{PgPool, migrate};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::app_config::{AppConfig, DonorStoreKind},
    donor_registry::{
        application::{
            command_services::donor_registry_command_service_impl::DonorRegistryCommandServiceImpl,
            query_services::donor_registry_query_service_impl::DonorRegistryQueryServiceImpl,
        },
        infrastructure::persistence::repositories::{
            donor_record_repository::DonorRecordRepository,
            in_memory::in_memory_donor_record_repository_impl::InMemoryDonorRecordRepositoryImpl,
            postgres::sqlx_donor_record_repository_impl::SqlxDonorRecordRepositoryImpl,
        },
        interfaces::rest::controllers::donor_registry_rest_controller::{
            DonorRegistryRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_donor_registry_router(config: &AppConfig) -> Result<Router, String> {
    let donor_repository: Arc<dyn DonorRecordRepository> = match config.donor_store {
        DonorStoreKind::Memory => {
            info!("using in-memory donor store");
            Arc::new(InMemoryDonorRecordRepositoryImpl::new())
        }
        DonorStoreKind::Postgres => {
            info!(
                host = %config.postgres_host,
                database = %config.postgres_database,
                "using postgres donor store"
            );
            let pool = PgPool::connect(&config.database_url())
                .await
                .map_err(|e| e.to_string())?;

            migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| e.to_string())?;

            Arc::new(SqlxDonorRecordRepositoryImpl::new(pool))
        }
    };

    Ok(build_donor_registry_router_with_repository(donor_repository))
}

pub fn build_donor_registry_router_with_repository(
    donor_repository: Arc<dyn DonorRecordRepository>,
) -> Router {
    let command_service = Arc::new(DonorRegistryCommandServiceImpl::new(
        donor_repository.clone(),
    ));
    let query_service = Arc::new(DonorRegistryQueryServiceImpl::new(donor_repository));

    router(DonorRegistryRestControllerState {
        command_service,
        query_service,
    })
    .layer(TraceLayer::new_for_http())
}
