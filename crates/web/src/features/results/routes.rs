use axum::{
    Router,
    middleware,
    routing::{delete, post, put},
};
use storage::Database;

use super::handlers::{
    create_result, create_team_result, delete_result, delete_team_result, update_result,
};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Routes nested under `/api/tournaments`.
pub fn tournament_routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/:id/results", post(create_result))
        .route("/:id/teams", post(create_team_result))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}

/// Routes nested under `/api/results`.
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/:id", put(update_result))
        .route("/:id", delete(delete_result))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}

/// Routes nested under `/api/teams`.
pub fn team_routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/:id", delete(delete_team_result))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
