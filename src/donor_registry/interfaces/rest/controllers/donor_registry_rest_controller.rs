use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
};

use crate::donor_registry::{
    domain::{
        model::{
            commands::remove_donor_command::RemoveDonorCommand,
            enums::{
                donor_registry_domain_error::DonorRegistryDomainError,
                donor_removal_outcome::DonorRemovalOutcome,
            },
            queries::search_donors_query::SearchDonorsQuery,
        },
        services::{
            donor_registry_command_service::DonorRegistryCommandService,
            donor_registry_query_service::DonorRegistryQueryService,
        },
    },
    interfaces::rest::resources::{
        donor_record_resource::DonorRecordResource,
        donor_removal_resource::DonorRemovalResource,
        error_response_resource::ErrorResponseResource, health_resource::HealthResource,
        register_donor_request_resource::RegisterDonorRequestResource,
        search_donors_query_resource::SearchDonorsQueryResource,
    },
};

#[derive(Clone)]
pub struct DonorRegistryRestControllerState {
    pub command_service: Arc<dyn DonorRegistryCommandService>,
    pub query_service: Arc<dyn DonorRegistryQueryService>,
}

pub fn router(state: DonorRegistryRestControllerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/donors", get(search_donors).post(register_donor))
        .route("/api/donors/:donor_id", delete(remove_donor))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "donor-registry",
    responses(
        (status = 200, description = "Service is up", body = HealthResource)
    )
)]
pub async fn health() -> Json<HealthResource> {
    Json(HealthResource {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/api/donors",
    tag = "donor-registry",
    request_body = RegisterDonorRequestResource,
    responses(
        (status = 201, description = "Donor registered", body = DonorRecordResource),
        (status = 400, description = "Donor payload rejected", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn register_donor(
    State(state): State<DonorRegistryRestControllerState>,
    Json(request): Json<RegisterDonorRequestResource>,
) -> Result<(StatusCode, Json<DonorRecordResource>), (StatusCode, Json<ErrorResponseResource>)> {
    let registered = state
        .command_service
        .handle_register(request.into_command_parts())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(DonorRecordResource::from(registered))))
}

#[utoipa::path(
    get,
    path = "/api/donors",
    tag = "donor-registry",
    params(
        ("bloodGroup" = Option<String>, Query, description = "Blood group, matched case-insensitively"),
        ("city" = Option<String>, Query, description = "City, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Matching donors in registration order", body = [DonorRecordResource]),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn search_donors(
    State(state): State<DonorRegistryRestControllerState>,
    Query(query): Query<SearchDonorsQueryResource>,
) -> Result<Json<Vec<DonorRecordResource>>, (StatusCode, Json<ErrorResponseResource>)> {
    let query = SearchDonorsQuery::new(query.blood_group, query.city);
    let donors = state
        .query_service
        .handle_search(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        donors.into_iter().map(DonorRecordResource::from).collect(),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/donors/{donor_id}",
    tag = "donor-registry",
    params(("donor_id" = i64, Path, description = "Donor identifier")),
    responses(
        (status = 200, description = "Removal processed; `removed` tells whether a donor matched", body = DonorRemovalResource),
        (status = 400, description = "Invalid donor id", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn remove_donor(
    State(state): State<DonorRegistryRestControllerState>,
    Path(donor_id): Path<String>,
) -> Result<Json<DonorRemovalResource>, (StatusCode, Json<ErrorResponseResource>)> {
    let command = RemoveDonorCommand::new(donor_id).map_err(map_domain_error)?;
    let donor_id = command.donor_id();

    let outcome = state
        .command_service
        .handle_remove(command)
        .await
        .map_err(map_domain_error)?;

    let message = match outcome {
        DonorRemovalOutcome::Removed => "donor removed",
        DonorRemovalOutcome::NotFound => "no donor matched the id",
    };

    Ok(Json(DonorRemovalResource {
        id: donor_id.value(),
        removed: outcome.was_removed(),
        message: message.to_string(),
    }))
}

fn map_domain_error(error: DonorRegistryDomainError) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match error {
        DonorRegistryDomainError::MissingName
        | DonorRegistryDomainError::MissingCity
        | DonorRegistryDomainError::InvalidBloodGroup
        | DonorRegistryDomainError::InvalidPhone
        | DonorRegistryDomainError::InvalidDonorId => StatusCode::BAD_REQUEST,
        DonorRegistryDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponseResource {
            code: error.code().to_string(),
            message: error.to_string(),
        }),
    )
}
