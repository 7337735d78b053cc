use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct LengthQuery {
    /// Whole inches of length.
    pub inches: i32,
    /// Additional eighths of an inch.
    #[serde(default)]
    pub eighths: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct WeightQuery {
    /// Weight in pounds.
    pub weight: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WeightConversionResponse {
    pub inches: i32,
    pub eighths: i32,
    pub weight: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LengthConversionResponse {
    pub weight: Decimal,
    /// Chart length in decimal inches, eighth-inch resolution.
    pub length: Decimal,
}
