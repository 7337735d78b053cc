use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::anglers::handlers::list_anglers,
        features::anglers::handlers::get_angler,
        features::anglers::handlers::create_angler,
        features::anglers::handlers::update_angler,
        features::anglers::handlers::delete_angler,
        features::tournaments::handlers::list_tournaments,
        features::tournaments::handlers::get_tournament,
        features::tournaments::handlers::create_tournament,
        features::tournaments::handlers::update_tournament,
        features::tournaments::handlers::delete_tournament,
        features::results::handlers::create_result,
        features::results::handlers::update_result,
        features::results::handlers::delete_result,
        features::results::handlers::create_team_result,
        features::results::handlers::delete_team_result,
        features::standings::handlers::recompute_standings,
        features::standings::handlers::get_standings,
        features::standings::handlers::get_payouts,
        features::standings::handlers::get_angler_of_year,
        features::standings::handlers::get_heavy_stringer,
        features::standings::handlers::get_big_bass,
        features::rules::handlers::list_rule_sets,
        features::rules::handlers::get_rule_set,
        features::rules::handlers::create_rule_set,
        features::rules::handlers::list_payout_schedules,
        features::rules::handlers::get_payout_schedule,
        features::rules::handlers::create_payout_schedule,
        features::conversions::handlers::weight_for_length,
        features::conversions::handlers::length_for_weight,
    ),
    components(
        schemas(
            storage::dto::angler::CreateAnglerRequest,
            storage::dto::angler::UpdateAnglerRequest,
            storage::dto::angler::AnglerResponse,
            storage::dto::tournament::CreateTournamentRequest,
            storage::dto::tournament::UpdateTournamentRequest,
            storage::dto::tournament::TournamentResponse,
            storage::dto::result::CreateResultRequest,
            storage::dto::result::UpdateResultRequest,
            storage::dto::result::CreateTeamResultRequest,
            storage::dto::result::ResultResponse,
            storage::dto::result::TeamResultResponse,
            storage::dto::rules::CreateRuleSetRequest,
            storage::dto::rules::CreatePayoutScheduleRequest,
            storage::dto::standings::PayoutSummary,
            storage::dto::standings::AoyStanding,
            storage::dto::standings::HeavyStringer,
            storage::dto::standings::BigBassWinner,
            storage::dto::standings::TournamentStandings,
            storage::dto::standings::ResultLine,
            storage::dto::standings::TeamLine,
            storage::dto::conversion::WeightConversionResponse,
            storage::dto::conversion::LengthConversionResponse,
            storage::models::Angler,
            storage::models::Tournament,
            storage::models::AnglerResult,
            storage::models::TeamResult,
            storage::models::RuleSet,
            storage::models::PayoutSchedule,
        )
    ),
    tags(
        (name = "anglers", description = "Club roster endpoints"),
        (name = "tournaments", description = "Tournament scheduling endpoints"),
        (name = "results", description = "Weigh-in entry endpoints"),
        (name = "standings", description = "Placement, points and payout endpoints"),
        (name = "awards", description = "Season award endpoints"),
        (name = "rules", description = "Per-year rule and payout configuration"),
        (name = "conversions", description = "Length and weight chart lookups"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

fn app(db: Database, api_keys: ApiKeys) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let tournament_routes = features::tournaments::routes::routes(api_keys.clone())
        .merge(features::results::routes::tournament_routes(api_keys.clone()))
        .merge(features::standings::routes::tournament_routes(api_keys.clone()));

    Router::new()
        .nest("/api/anglers", features::anglers::routes::routes(api_keys.clone()))
        .nest("/api/tournaments", tournament_routes)
        .nest("/api/results", features::results::routes::routes(api_keys.clone()))
        .nest("/api/teams", features::results::routes::team_routes(api_keys.clone()))
        .nest("/api/awards", features::standings::routes::award_routes())
        .nest("/api/rules", features::rules::routes::rule_routes(api_keys.clone()))
        .nest(
            "/api/payout-schedules",
            features::rules::routes::payout_routes(api_keys),
        )
        .nest("/api/conversions", features::conversions::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting fishing club API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;

    axum::serve(listener, app(db, api_keys)).await?;

    Ok(())
}
