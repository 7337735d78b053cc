use axum::{
    Router,
    middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_angler, delete_angler, get_angler, list_anglers, update_angler};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_angler))
        .route("/:id", put(update_angler))
        .route("/:id", delete(delete_angler))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_anglers))
        .route("/:id", get(get_angler))
        .merge(protected)
}
