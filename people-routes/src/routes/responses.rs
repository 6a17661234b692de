use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use people_core::model::Person;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PersonResponse {
    #[serde(skip)]
    status_code: StatusCode,
    #[serde(flatten)]
    person: Person,
}

impl PersonResponse {
    pub fn ok(person: Person) -> Self {
        Self {
            status_code: StatusCode::OK,
            person,
        }
    }

    pub fn created(person: Person) -> Self {
        Self {
            status_code: StatusCode::CREATED,
            person,
        }
    }
}

impl IntoResponse for PersonResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}
