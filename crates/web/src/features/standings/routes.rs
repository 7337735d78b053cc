use axum::{
    Router,
    middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    get_angler_of_year, get_big_bass, get_heavy_stringer, get_payouts, get_standings,
    recompute_standings,
};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Routes nested under `/api/tournaments`.
pub fn tournament_routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:id/standings", post(recompute_standings))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:id/standings", get(get_standings))
        .route("/:id/payouts", get(get_payouts))
        .merge(protected)
}

/// Routes nested under `/api/awards`.
pub fn award_routes() -> Router<Database> {
    Router::new()
        .route("/:year/aoy", get(get_angler_of_year))
        .route("/:year/heavy-stringer", get(get_heavy_stringer))
        .route("/:year/big-bass", get(get_big_bass))
}
