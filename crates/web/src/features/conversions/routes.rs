use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{length_for_weight, weight_for_length};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/weight", get(weight_for_length))
        .route("/length", get(length_for_weight))
}
