use axum::{
    Json,
    extract::Query,
    response::{IntoResponse, Response},
};
use storage::{
    dto::conversion::{
        LengthConversionResponse, LengthQuery, WeightConversionResponse, WeightQuery,
    },
    services::conversion,
};

use crate::error::WebError;

#[utoipa::path(
    get,
    path = "/api/conversions/weight",
    params(LengthQuery),
    responses(
        (status = 200, description = "Chart weight for a measured length", body = WeightConversionResponse)
    ),
    tag = "conversions"
)]
pub async fn weight_for_length(Query(query): Query<LengthQuery>) -> Result<Response, WebError> {
    let weight = conversion::weight_for_length(query.inches, query.eighths);

    Ok(Json(WeightConversionResponse {
        inches: query.inches,
        eighths: query.eighths,
        weight,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/conversions/length",
    params(WeightQuery),
    responses(
        (status = 200, description = "Closest chart length for a weight", body = LengthConversionResponse)
    ),
    tag = "conversions"
)]
pub async fn length_for_weight(Query(query): Query<WeightQuery>) -> Result<Response, WebError> {
    let length = conversion::length_for_weight(query.weight);

    Ok(Json(LengthConversionResponse {
        weight: query.weight,
        length,
    })
    .into_response())
}
