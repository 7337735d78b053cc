use axum::{
    Router,
    middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    create_payout_schedule, create_rule_set, get_payout_schedule, get_rule_set,
    list_payout_schedules, list_rule_sets,
};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Routes nested under `/api/rules`.
pub fn rule_routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_rule_set))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_rule_sets))
        .route("/:year", get(get_rule_set))
        .merge(protected)
}

/// Routes nested under `/api/payout-schedules`.
pub fn payout_routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_payout_schedule))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_payout_schedules))
        .route("/:year", get(get_payout_schedule))
        .merge(protected)
}
