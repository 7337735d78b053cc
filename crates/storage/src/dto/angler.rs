use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Angler;

/// Request payload for adding an angler to the roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAnglerRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "First name must be between 1 and 100 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Last name must be between 1 and 100 characters"
    ))]
    pub last_name: String,

    #[serde(default = "default_member")]
    pub member: bool,

    #[validate(email)]
    pub email: Option<String>,
}

fn default_member() -> bool {
    true
}

/// Request payload for updating an angler
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAnglerRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    pub member: Option<bool>,

    #[validate(email)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnglerResponse {
    pub angler_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub member: bool,
    pub email: Option<String>,
}

impl From<Angler> for AnglerResponse {
    fn from(angler: Angler) -> Self {
        let display_name = angler.name().display();
        Self {
            angler_id: angler.angler_id,
            first_name: angler.first_name,
            last_name: angler.last_name,
            display_name,
            member: angler.member,
            email: angler.email,
        }
    }
}
