use people_core::model::{NewPerson, PersonDetails};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

/// Identifiers are always assigned on save, so an `id` in the request body is dropped.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePersonRequest {
    pub name: String,
    /// Any other fields of the person. They are stored and returned unchanged.
    #[serde(flatten)]
    #[schema(value_type = std::collections::BTreeMap<String, Value>)]
    pub details: PersonDetails,
}

impl From<CreatePersonRequest> for NewPerson {
    fn from(mut request: CreatePersonRequest) -> Self {
        if let Some(id) = request.details.remove("id") {
            debug!("ignoring client supplied id {id}");
        }
        NewPerson::new(request.name, request.details)
    }
}
