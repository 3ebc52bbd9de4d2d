use axum::Router;
use blood_donor_directory::{
    config::app_config::AppConfig,
    donor_registry::{
        build_donor_registry_router,
        interfaces::rest::resources::{
            donor_record_resource::DonorRecordResource,
            donor_removal_resource::DonorRemovalResource,
            error_response_resource::ErrorResponseResource, health_resource::HealthResource,
            register_donor_request_resource::RegisterDonorRequestResource,
            search_donors_query_resource::SearchDonorsQueryResource,
        },
    },
    logging::init_logging,
};
use dotenvy::dotenv;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        blood_donor_directory::donor_registry::interfaces::rest::controllers::donor_registry_rest_controller::health,
        blood_donor_directory::donor_registry::interfaces::rest::controllers::donor_registry_rest_controller::register_donor,
        blood_donor_directory::donor_registry::interfaces::rest::controllers::donor_registry_rest_controller::search_donors,
        blood_donor_directory::donor_registry::interfaces::rest::controllers::donor_registry_rest_controller::remove_donor
    ),
    components(
        schemas(
            RegisterDonorRequestResource,
            SearchDonorsQueryResource,
            DonorRecordResource,
            DonorRemovalResource,
            ErrorResponseResource,
            HealthResource
        )
    ),
    tags(
        (name = "donor-registry", description = "Blood donor registration and lookup")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_logging(&config.log_level);

    if let Err(message) = run(config).await {
        error!(error = %message, "donor directory stopped");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), String> {
    let donor_registry_router = build_donor_registry_router(&config).await?;

    let app = Router::new()
        .merge(donor_registry_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    info!("donor directory listening on http://localhost:{}", config.port);
    info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| e.to_string())
}
